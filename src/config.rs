// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Keycloak provider configuration.
//!
//! The provider keeps its Keycloak connection settings as a flat JSON
//! credentials document:
//!
//! ```json
//! {
//!   "url": "https://keycloak.example.com",
//!   "client_id": "admin-cli",
//!   "username": "admin",
//!   "password": "secret",
//!   "realm": "master",
//!   "client_timeout": "30"
//! }
//! ```
//!
//! Only `url` and `client_id` are required. Values are accepted leniently,
//! because credentials documents are usually string-only: booleans may be
//! `"true"`/`"false"` and the timeout may be a numeric string.
//!
//! # Example
//!
//! ```rust
//! use keycloak_lookup::config::ProviderConfig;
//!
//! let config = ProviderConfig::from_json_str(
//!     r#"{"url": "http://localhost:8080/", "client_id": "admin-cli", "base_path": "/auth"}"#,
//! )?;
//!
//! assert_eq!(config.realm, "master");
//! assert_eq!(config.server_url(), "http://localhost:8080/auth");
//! # Ok::<(), keycloak_lookup::errors::ConfigError>(())
//! ```

use crate::constants::{
    CONFIG_KEY_ADDITIONAL_HEADERS, CONFIG_KEY_BASE_PATH, CONFIG_KEY_CLIENT_ID,
    CONFIG_KEY_CLIENT_SECRET, CONFIG_KEY_CLIENT_TIMEOUT, CONFIG_KEY_INITIAL_LOGIN,
    CONFIG_KEY_PASSWORD, CONFIG_KEY_REALM, CONFIG_KEY_ROOT_CA_CERTIFICATE,
    CONFIG_KEY_TLS_INSECURE_SKIP_VERIFY, CONFIG_KEY_URL, CONFIG_KEY_USERNAME,
    DEFAULT_CLIENT_TIMEOUT_SECS, DEFAULT_REALM,
};
use crate::errors::ConfigError;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Connection settings for the Keycloak admin API.
#[derive(Clone)]
pub struct ProviderConfig {
    /// Keycloak server URL, without the base path
    pub url: String,
    /// Path prefix in front of `/realms` and `/admin` (empty on current servers)
    pub base_path: String,
    /// OIDC client used to obtain admin tokens
    pub client_id: String,
    /// Secret of the admin client (confidential clients only)
    pub client_secret: Option<String>,
    /// Username for the password grant
    pub username: Option<String>,
    /// Password for the password grant
    pub password: Option<String>,
    /// Realm the admin client authenticates against
    pub realm: String,
    /// Log in while constructing the client instead of on first use
    pub initial_login: bool,
    /// Timeout applied to every HTTP request
    pub client_timeout: Duration,
    /// Skip TLS certificate verification
    pub tls_insecure_skip_verify: bool,
    /// PEM encoded CA certificate trusted in addition to the system roots
    pub root_ca_certificate: Option<String>,
    /// Headers sent with every request
    pub additional_headers: BTreeMap<String, String>,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("url", &self.url)
            .field("base_path", &self.base_path)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("realm", &self.realm)
            .field("initial_login", &self.initial_login)
            .field("client_timeout", &self.client_timeout)
            .field("tls_insecure_skip_verify", &self.tls_insecure_skip_verify)
            .field("root_ca_certificate", &self.root_ca_certificate.is_some())
            .field("additional_headers", &self.additional_headers.keys())
            .finish()
    }
}

impl ProviderConfig {
    /// Minimal configuration with defaults for everything but the server and client.
    #[must_use]
    pub fn new(url: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            base_path: String::new(),
            client_id: client_id.into(),
            client_secret: None,
            username: None,
            password: None,
            realm: DEFAULT_REALM.to_string(),
            initial_login: true,
            client_timeout: Duration::from_secs(DEFAULT_CLIENT_TIMEOUT_SECS),
            tls_insecure_skip_verify: false,
            root_ca_certificate: None,
            additional_headers: BTreeMap::new(),
        }
    }

    /// Build the configuration from a credentials document.
    ///
    /// Unknown keys are ignored. Empty strings count as unset for optional keys.
    ///
    /// # Errors
    ///
    /// Returns an error if `url` or `client_id` is missing or empty, or if a
    /// key holds a value of an unsupported type.
    pub fn from_credentials(credentials: &Map<String, Value>) -> Result<Self, ConfigError> {
        let url = required_string(credentials, CONFIG_KEY_URL)?;
        let client_id = required_string(credentials, CONFIG_KEY_CLIENT_ID)?;

        let mut config = Self::new(url, client_id);
        config.base_path = optional_string(credentials, CONFIG_KEY_BASE_PATH)?.unwrap_or_default();
        config.client_secret = optional_string(credentials, CONFIG_KEY_CLIENT_SECRET)?;
        config.username = optional_string(credentials, CONFIG_KEY_USERNAME)?;
        config.password = optional_string(credentials, CONFIG_KEY_PASSWORD)?;
        if let Some(realm) = optional_string(credentials, CONFIG_KEY_REALM)? {
            config.realm = realm;
        }
        if let Some(initial_login) = optional_bool(credentials, CONFIG_KEY_INITIAL_LOGIN)? {
            config.initial_login = initial_login;
        }
        if let Some(secs) = optional_u64(credentials, CONFIG_KEY_CLIENT_TIMEOUT)? {
            config.client_timeout = Duration::from_secs(secs);
        }
        if let Some(skip) = optional_bool(credentials, CONFIG_KEY_TLS_INSECURE_SKIP_VERIFY)? {
            config.tls_insecure_skip_verify = skip;
        }
        config.root_ca_certificate = optional_string(credentials, CONFIG_KEY_ROOT_CA_CERTIFICATE)?;
        config.additional_headers = string_map(credentials, CONFIG_KEY_ADDITIONAL_HEADERS)?;

        debug!(
            url = %config.url,
            realm = %config.realm,
            client_id = %config.client_id,
            password_grant = config.uses_password_grant(),
            "Parsed Keycloak provider configuration"
        );

        Ok(config)
    }

    /// Parse a credentials document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a JSON object or fails validation.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let credentials: Map<String, Value> =
            serde_json::from_str(json).map_err(|source| ConfigError::Parse {
                path: "<inline>".to_string(),
                source,
            })?;
        Self::from_credentials(&credentials)
    }

    /// Read and parse a credentials document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a JSON object, or
    /// fails validation.
    pub async fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: display.clone(),
                source,
            })?;
        let credentials: Map<String, Value> =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: display,
                source,
            })?;
        Self::from_credentials(&credentials)
    }

    /// Server URL including the base path, without a trailing slash.
    #[must_use]
    pub fn server_url(&self) -> String {
        let base_path = self.base_path.trim_matches('/');
        let url = self.url.trim_end_matches('/');
        if base_path.is_empty() {
            url.to_string()
        } else {
            format!("{url}/{base_path}")
        }
    }

    /// True when the resource owner password grant is used instead of client credentials.
    #[must_use]
    pub fn uses_password_grant(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }
}

fn required_string(map: &Map<String, Value>, key: &str) -> Result<String, ConfigError> {
    optional_string(map, key)?.ok_or_else(|| ConfigError::MissingKey {
        key: key.to_string(),
    })
}

fn optional_string(map: &Map<String, Value>, key: &str) -> Result<Option<String>, ConfigError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            expected: "a string",
        }),
    }
}

fn optional_bool(map: &Map<String, Value>, key: &str) -> Result<Option<bool>, ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        key: key.to_string(),
        expected: "a boolean or \"true\"/\"false\"",
    };
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => s.trim().parse::<bool>().map(Some).map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}

fn optional_u64(map: &Map<String, Value>, key: &str) -> Result<Option<u64>, ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        key: key.to_string(),
        expected: "a non-negative integer",
    };
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_u64().map(Some).ok_or_else(invalid),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => s.trim().parse::<u64>().map(Some).map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}

/// Accepts either a JSON object of strings or a string holding one.
fn string_map(map: &Map<String, Value>, key: &str) -> Result<BTreeMap<String, String>, ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        key: key.to_string(),
        expected: "an object of strings",
    };
    let object = match map.get(key) {
        None | Some(Value::Null) => return Ok(BTreeMap::new()),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(BTreeMap::new()),
        Some(Value::String(s)) => {
            serde_json::from_str::<Map<String, Value>>(s).map_err(|_| invalid())?
        }
        Some(Value::Object(o)) => o.clone(),
        Some(_) => return Err(invalid()),
    };

    object
        .into_iter()
        .map(|(name, value)| match value {
            Value::String(v) => Ok((name, v)),
            _ => Err(invalid()),
        })
        .collect()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
