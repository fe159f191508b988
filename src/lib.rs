// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # keycloak-lookup - identifier resolution for managed Keycloak resources
//!
//! An infrastructure provider that manages Keycloak objects records the id of
//! each object it created. When that id is missing or no longer valid, the
//! object has to be found again from the fields that identify it inside
//! Keycloak: realm and alias for a flow, realm and name for a group, and so on.
//!
//! ## Overview
//!
//! - Look up by the recorded id first, so a valid link never triggers a search
//! - Treat "not found" as "not created yet" rather than as an error
//! - Fail loudly when the identifying properties match more than one object
//!
//! ## Modules
//!
//! - [`lookup`] - Resolution algorithm, parameters and the per-kind lookup trait
//! - [`resources`] - Lookups for each supported Keycloak resource kind
//! - [`keycloak`] - Typed client for the Keycloak admin REST API
//! - [`config`] - Provider configuration (server, credentials, TLS)
//! - [`errors`] - Error types
//! - [`constants`] - Configuration keys, parameter names and defaults
//!
//! ## Example
//!
//! ```rust,no_run
//! use keycloak_lookup::config::ProviderConfig;
//! use keycloak_lookup::lookup::{Parameters, Resolver};
//! use keycloak_lookup::resources::ResourceKind;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut config = ProviderConfig::new("https://sso.example.com", "admin-cli");
//! config.username = Some("admin".to_string());
//! config.password = Some("secret".to_string());
//!
//! let resolver = Resolver::from_config(&config).await?;
//!
//! let params: Parameters = [("realm_id", "demo"), ("name", "developers")]
//!     .into_iter()
//!     .collect();
//! let id = resolver
//!     .resolve(ResourceKind::Group, "4f1c2d3e-stale-id", &params)
//!     .await?;
//! println!("group id: {}", id.unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod errors;
pub mod keycloak;
pub mod lookup;
pub mod resources;
