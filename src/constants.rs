// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the Keycloak lookup crate.
//!
//! This module contains all numeric and string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// Provider Configuration Keys
// ============================================================================

/// Keycloak server URL (required)
pub const CONFIG_KEY_URL: &str = "url";

/// OIDC client used to obtain admin tokens (required)
pub const CONFIG_KEY_CLIENT_ID: &str = "client_id";

/// Secret of the admin client
pub const CONFIG_KEY_CLIENT_SECRET: &str = "client_secret";

/// Username for the password grant
pub const CONFIG_KEY_USERNAME: &str = "username";

/// Password for the password grant
pub const CONFIG_KEY_PASSWORD: &str = "password";

/// Realm the admin client authenticates against
pub const CONFIG_KEY_REALM: &str = "realm";

/// Path prefix in front of `/realms` and `/admin` (e.g. `/auth` on legacy servers)
pub const CONFIG_KEY_BASE_PATH: &str = "base_path";

/// Whether to log in while constructing the client
pub const CONFIG_KEY_INITIAL_LOGIN: &str = "initial_login";

/// HTTP request timeout in seconds
pub const CONFIG_KEY_CLIENT_TIMEOUT: &str = "client_timeout";

/// Skip TLS certificate verification
pub const CONFIG_KEY_TLS_INSECURE_SKIP_VERIFY: &str = "tls_insecure_skip_verify";

/// PEM encoded CA certificate to trust in addition to the system roots
pub const CONFIG_KEY_ROOT_CA_CERTIFICATE: &str = "root_ca_certificate";

/// Extra headers sent with every request
pub const CONFIG_KEY_ADDITIONAL_HEADERS: &str = "additional_headers";

// ============================================================================
// Provider Configuration Defaults
// ============================================================================

/// Realm used for authentication when none is configured
pub const DEFAULT_REALM: &str = "master";

/// Default HTTP request timeout (15 seconds)
pub const DEFAULT_CLIENT_TIMEOUT_SECS: u64 = 15;

/// User agent sent to Keycloak
pub const USER_AGENT: &str = concat!("keycloak-lookup/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Identifying Property Keys
// ============================================================================

/// Realm scoping most resources
pub const PARAM_REALM_ID: &str = "realm_id";

/// Realm key used by organizations
pub const PARAM_REALM: &str = "realm";

/// Display name of a resource
pub const PARAM_NAME: &str = "name";

/// Alias of an authentication flow or subflow
pub const PARAM_ALIAS: &str = "alias";

/// Alias of the flow owning a subflow or execution
pub const PARAM_PARENT_FLOW_ALIAS: &str = "parent_flow_alias";

/// Authenticator provider of an execution
pub const PARAM_AUTHENTICATOR: &str = "authenticator";

/// Execution owning an execution config
pub const PARAM_EXECUTION_ID: &str = "execution_id";

/// Organization domain
pub const PARAM_DOMAIN: &str = "domain";

/// Client scoping a role or protocol mapper (or the OIDC `clientId` of a client)
pub const PARAM_CLIENT_ID: &str = "client_id";

/// Client scope owning a protocol mapper
pub const PARAM_CLIENT_SCOPE_ID: &str = "client_scope_id";

/// Parent group of a subgroup
pub const PARAM_PARENT_ID: &str = "parent_id";

// ============================================================================
// Keycloak Component Constants
// ============================================================================

/// Component type of realm key providers
pub const COMPONENT_TYPE_KEY_PROVIDER: &str = "org.keycloak.keys.KeyProvider";

/// Component type of user storage providers (LDAP, Kerberos, ...)
pub const COMPONENT_TYPE_USER_STORAGE: &str = "org.keycloak.storage.UserStorageProvider";

/// Provider id of the RSA keystore
pub const PROVIDER_ID_RSA: &str = "rsa";

/// Provider id of the LDAP user federation
pub const PROVIDER_ID_LDAP: &str = "ldap";

// ============================================================================
// Runtime Constants
// ============================================================================

/// Number of worker threads for Tokio runtime
pub const TOKIO_WORKER_THREADS: usize = 2;
