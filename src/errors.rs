// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for the Keycloak lookup crate.
//!
//! This module provides specialized error types for:
//! - Provider configuration parsing (credentials document)
//! - Keycloak admin REST API calls (HTTP status, transport, decoding)
//! - Identifying-properties lookups (missing parameters, ambiguous matches)
//!
//! The lookup error wraps the client error so callers can tell a soft
//! "not found" apart from a real failure.

use thiserror::Error;

/// Errors raised while reading the provider configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required configuration key is absent
    #[error("required Keycloak configuration key '{key}' is missing")]
    MissingKey {
        /// The configuration key
        key: String,
    },

    /// A configuration key holds a value of the wrong type
    #[error("Keycloak configuration key '{key}' must be {expected}")]
    InvalidValue {
        /// The configuration key
        key: String,
        /// Human readable description of the accepted values
        expected: &'static str,
    },

    /// The configuration file could not be read
    #[error("cannot read Keycloak configuration from {path}")]
    Read {
        /// Path of the configuration file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration document is not a JSON object
    #[error("cannot unmarshal Keycloak credentials from {path} as JSON")]
    Parse {
        /// Path of the configuration file
        path: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// Errors returned by the Keycloak admin REST client.
#[derive(Error, Debug)]
pub enum KeycloakError {
    /// Keycloak answered with a non-success HTTP status
    ///
    /// A 404 here is the "not found" signal the lookup falls back on.
    #[error("Keycloak API returned HTTP {status} for {url}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Request URL
        url: String,
        /// Response body (or a placeholder when it could not be read)
        message: String,
    },

    /// Token request was rejected
    #[error("failed to log in to realm '{realm}' (HTTP {status}): {message}")]
    Authentication {
        /// Realm used for authentication
        realm: String,
        /// HTTP status code of the token endpoint
        status: u16,
        /// Response body
        message: String,
    },

    /// The request could not be sent (connection refused, timeout, TLS, ...)
    #[error("failed to send HTTP request to {url}")]
    Request {
        /// Request URL
        url: String,
        /// Transport error
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not match the expected representation
    #[error("failed to decode response from {url}")]
    Decode {
        /// Request URL
        url: String,
        /// Decoding error
        #[source]
        source: reqwest::Error,
    },

    /// The configured server URL cannot be used as a base URL
    #[error("invalid Keycloak URL '{url}'")]
    InvalidUrl {
        /// The offending URL
        url: String,
        /// Parse error, if the URL failed to parse at all
        #[source]
        source: Option<url::ParseError>,
    },

    /// A configured additional header is not a valid HTTP header
    #[error("invalid additional header '{name}'")]
    InvalidHeader {
        /// Header name
        name: String,
    },

    /// The HTTP client could not be built (bad root CA, TLS backend failure)
    #[error("failed to build HTTP client: {reason}")]
    ClientBuild {
        /// What went wrong
        reason: String,
        /// Underlying error
        #[source]
        source: reqwest::Error,
    },
}

impl KeycloakError {
    /// HTTP status code of the failed call, if Keycloak answered at all.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Authentication { status, .. } => Some(*status),
            Self::Request { source, .. } | Self::Decode { source, .. } => {
                source.status().map(|s| s.as_u16())
            }
            Self::InvalidUrl { .. } | Self::InvalidHeader { .. } | Self::ClientBuild { .. } => {
                None
            }
        }
    }

    /// Returns true for an admin API 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// Returns true if the call may succeed when retried later.
    ///
    /// Transport failures, rate limiting and server errors are transient.
    /// Client errors and local configuration problems are not.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Request { .. } => true,
            Self::Api { status, .. } | Self::Authentication { status, .. } => {
                *status == 429 || (500..=599).contains(status)
            }
            Self::Decode { .. }
            | Self::InvalidUrl { .. }
            | Self::InvalidHeader { .. }
            | Self::ClientBuild { .. } => false,
        }
    }
}

/// Errors returned while resolving an identifier from identifying properties.
#[derive(Error, Debug)]
pub enum LookupError {
    /// A required identifying property is not present in the parameters
    #[error("required param '{key}' not set")]
    MissingRequiredParameter {
        /// Parameter key
        key: String,
    },

    /// An identifying property is present but unusable
    #[error("param '{key}' is invalid: {reason}")]
    InvalidParameter {
        /// Parameter key
        key: String,
        /// Explanation of what is invalid
        reason: String,
    },

    /// The identifying properties match more than one remote object
    #[error(
        "Too many resources found, which match the identifying parameters. Expected 0 or 1, but was {count}"
    )]
    Ambiguous {
        /// Number of matching objects
        count: usize,
    },

    /// Provider configuration could not be used to build a client
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The Keycloak API call failed
    #[error(transparent)]
    Keycloak(#[from] KeycloakError),
}

impl LookupError {
    /// Returns true for a Keycloak 404 wrapped in this error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Keycloak(e) if e.is_not_found())
    }

    /// HTTP status code of the Keycloak call that failed, if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Keycloak(e) => e.status_code(),
            _ => None,
        }
    }

    /// Returns true if the lookup may succeed when retried later.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Keycloak(e) => e.is_transient(),
            Self::MissingRequiredParameter { .. }
            | Self::InvalidParameter { .. }
            | Self::Ambiguous { .. }
            | Self::Config(_) => false,
        }
    }

    /// Short machine-readable reason, suitable for status conditions and logs.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingRequiredParameter { .. } => "MissingIdentifyingProperty",
            Self::InvalidParameter { .. } => "InvalidIdentifyingProperty",
            Self::Ambiguous { .. } => "AmbiguousIdentifyingProperties",
            Self::Config(_) => "InvalidProviderConfig",
            Self::Keycloak(KeycloakError::Authentication { .. }) => "KeycloakAuthFailed",
            Self::Keycloak(KeycloakError::Api { status: 404, .. }) => "KeycloakNotFound",
            Self::Keycloak(KeycloakError::Api { .. }) => "KeycloakApiError",
            Self::Keycloak(KeycloakError::Request { .. }) => "KeycloakUnreachable",
            Self::Keycloak(KeycloakError::Decode { .. }) => "KeycloakUnexpectedResponse",
            Self::Keycloak(
                KeycloakError::InvalidUrl { .. }
                | KeycloakError::InvalidHeader { .. }
                | KeycloakError::ClientBuild { .. },
            ) => "InvalidProviderConfig",
        }
    }
}

/// A resource kind name that is neither a known CLI name nor a Terraform name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown resource kind '{name}'")]
pub struct UnknownResourceKind {
    /// The name that failed to parse
    pub name: String,
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod errors_tests;
