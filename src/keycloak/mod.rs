// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Keycloak admin REST API client.
//!
//! This module provides a small typed client over the Keycloak admin API,
//! covering the read operations needed to resolve managed resources:
//!
//! - Authentication flows, subflows, executions and execution configs
//! - Organizations
//! - Realm and client roles
//! - Groups and subgroups
//! - OpenID clients
//! - Components (key providers, user federation)
//! - Protocol mappers of clients and client scopes
//!
//! # Authentication
//!
//! The client obtains an access token from the OpenID Connect token endpoint of
//! the configured realm, using the password grant when a username and password
//! are configured and the client credentials grant otherwise. A `401` from the
//! admin API triggers one fresh login and one retry of the request.
//!
//! # Example
//!
//! ```rust,no_run
//! use keycloak_lookup::config::ProviderConfig;
//! use keycloak_lookup::keycloak::KeycloakClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut config = ProviderConfig::new("http://keycloak:8080", "admin-cli");
//! config.username = Some("admin".to_string());
//! config.password = Some("admin".to_string());
//!
//! let client = KeycloakClient::new(&config).await?;
//! let flow = client.authentication_flow_from_alias("demo", "browser").await?;
//! println!("browser flow: {:?}", flow.map(|f| f.id));
//! # Ok(())
//! # }
//! ```

pub mod authentication;
pub mod clients;
pub mod components;
pub mod groups;
pub mod organizations;
pub mod protocol_mappers;
pub mod roles;
pub mod types;

pub use types::{
    AuthenticationExecution, AuthenticationExecutionConfig, AuthenticationExecutionInfo,
    AuthenticationFlow, Client, Component, Group, MapperOwner, Organization, OrganizationDomain,
    ProtocolMapper, Role,
};

use crate::config::ProviderConfig;
use crate::constants::USER_AGENT;
use crate::errors::KeycloakError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, error, info};
use url::Url;

/// Tokens this close to expiry are refreshed before use
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(10);

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

struct AccessToken {
    value: String,
    expires_at: Option<Instant>,
}

impl AccessToken {
    fn is_fresh(&self) -> bool {
        self.expires_at
            .is_none_or(|expires_at| Instant::now() + TOKEN_EXPIRY_MARGIN < expires_at)
    }
}

/// Client for the Keycloak admin REST API.
pub struct KeycloakClient {
    http: HttpClient,
    /// Server URL including the base path
    base_url: Url,
    /// Realm used for authentication
    realm: String,
    client_id: String,
    client_secret: Option<String>,
    /// Username and password for the password grant
    user_credentials: Option<(String, String)>,
    token: RwLock<Option<AccessToken>>,
}

impl std::fmt::Debug for KeycloakClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeycloakClient")
            .field("base_url", &self.base_url.as_str())
            .field("realm", &self.realm)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl KeycloakClient {
    /// Create a client and, if `initial_login` is set, log in right away.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot produce an HTTP client or
    /// the initial login fails.
    pub async fn new(config: &ProviderConfig) -> Result<Self, KeycloakError> {
        let client = Self::build(config)?;
        if config.initial_login {
            client.login().await?;
        }
        Ok(client)
    }

    /// Create a client without contacting Keycloak.
    ///
    /// The first request logs in.
    ///
    /// # Errors
    ///
    /// Returns an error if the server URL is unusable, an additional header is
    /// invalid, or the root CA certificate cannot be parsed.
    pub fn build(config: &ProviderConfig) -> Result<Self, KeycloakError> {
        let server_url = config.server_url();
        let base_url = Url::parse(&server_url).map_err(|source| KeycloakError::InvalidUrl {
            url: server_url.clone(),
            source: Some(source),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(KeycloakError::InvalidUrl {
                url: server_url,
                source: None,
            });
        }

        let mut headers = HeaderMap::new();
        for (name, value) in &config.additional_headers {
            let invalid = || KeycloakError::InvalidHeader { name: name.clone() };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.insert(header_name, header_value);
        }

        let mut builder = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(config.client_timeout)
            .default_headers(headers);

        if config.tls_insecure_skip_verify {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(pem) = &config.root_ca_certificate {
            let certificate = reqwest::Certificate::from_pem(pem.as_bytes()).map_err(|source| {
                KeycloakError::ClientBuild {
                    reason: "invalid root CA certificate".to_string(),
                    source,
                }
            })?;
            builder = builder.add_root_certificate(certificate);
        }

        let http = builder
            .build()
            .map_err(|source| KeycloakError::ClientBuild {
                reason: "TLS backend initialization failed".to_string(),
                source,
            })?;

        let user_credentials = match (&config.username, &config.password) {
            (Some(username), Some(password)) => Some((username.clone(), password.clone())),
            _ => None,
        };

        Ok(Self {
            http,
            base_url,
            realm: config.realm.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            user_credentials,
            token: RwLock::new(None),
        })
    }

    /// URL below the server URL built from percent-encoded path segments.
    fn url(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, KeycloakError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| KeycloakError::InvalidUrl {
                url: self.base_url.to_string(),
                source: None,
            })?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// URL of an admin API resource inside a realm.
    fn admin_url(
        &self,
        realm: &str,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<Url, KeycloakError> {
        let mut all = vec!["admin", "realms", realm];
        all.extend_from_slice(segments);
        self.url(&all, query)
    }

    /// Obtain a fresh access token and store it.
    async fn login(&self) -> Result<String, KeycloakError> {
        let token_url = self.url(
            &["realms", &self.realm, "protocol", "openid-connect", "token"],
            &[],
        )?;

        // Serializer is not Send, so it must not live across the await below.
        let body = {
            let mut form = url::form_urlencoded::Serializer::new(String::new());
            form.append_pair("client_id", &self.client_id);
            if let Some(secret) = &self.client_secret {
                form.append_pair("client_secret", secret);
            }
            match &self.user_credentials {
                Some((username, password)) => {
                    form.append_pair("grant_type", "password");
                    form.append_pair("username", username);
                    form.append_pair("password", password);
                }
                None => {
                    form.append_pair("grant_type", "client_credentials");
                }
            }
            form.finish()
        };

        debug!(
            realm = %self.realm,
            client_id = %self.client_id,
            password_grant = self.user_credentials.is_some(),
            "Requesting Keycloak access token"
        );

        let response = self
            .http
            .post(token_url.clone())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|source| KeycloakError::Request {
                url: token_url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response_text(response).await;
            error!(
                realm = %self.realm,
                status = %status,
                error = %message,
                "Keycloak login failed"
            );
            return Err(KeycloakError::Authentication {
                realm: self.realm.clone(),
                status: status.as_u16(),
                message,
            });
        }

        let token: TokenResponse =
            response
                .json()
                .await
                .map_err(|source| KeycloakError::Decode {
                    url: token_url.to_string(),
                    source,
                })?;

        info!(realm = %self.realm, "Logged in to Keycloak");

        let value = token.access_token.clone();
        *self.token.write().await = Some(AccessToken {
            value: token.access_token,
            expires_at: token
                .expires_in
                .map(|secs| Instant::now() + Duration::from_secs(secs)),
        });
        Ok(value)
    }

    /// Current access token, logging in when there is none or it is about to expire.
    async fn access_token(&self) -> Result<String, KeycloakError> {
        if let Some(token) = self.token.read().await.as_ref() {
            if token.is_fresh() {
                return Ok(token.value.clone());
            }
        }
        self.login().await
    }

    async fn send_get(&self, url: &Url, token: &str) -> Result<Response, KeycloakError> {
        self.http
            .get(url.clone())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|source| KeycloakError::Request {
                url: url.to_string(),
                source,
            })
    }

    /// GET an admin API resource and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns `KeycloakError::Api` for any non-success status (a `401` only
    /// after a fresh login was also rejected), or a transport/decoding error.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        realm: &str,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T, KeycloakError> {
        let url = self.admin_url(realm, segments, query)?;

        debug!(url = %url, "GET Keycloak admin API");

        let token = self.access_token().await?;
        let mut response = self.send_get(&url, &token).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            debug!(url = %url, "Access token rejected, logging in again");
            let token = self.login().await?;
            response = self.send_get(&url, &token).await?;
        }

        let status = response.status();
        if !status.is_success() {
            let message = response_text(response).await;
            if status == StatusCode::NOT_FOUND {
                debug!(url = %url, "Keycloak object not found");
            } else {
                error!(
                    url = %url,
                    status = %status,
                    error = %message,
                    "Keycloak admin API request failed"
                );
            }
            return Err(KeycloakError::Api {
                status: status.as_u16(),
                url: url.to_string(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| KeycloakError::Decode {
                url: url.to_string(),
                source,
            })
    }

    /// Like [`Self::get`], but maps a `404` to `None`.
    pub(crate) async fn get_optional<T: DeserializeOwned>(
        &self,
        realm: &str,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<Option<T>, KeycloakError> {
        match self.get(realm, segments, query).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

async fn response_text(response: Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string())
}
