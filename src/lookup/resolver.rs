// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Resolver binding a Keycloak client to the per-kind lookups.

use super::{resolve_id, Parameters};
use crate::config::ProviderConfig;
use crate::errors::LookupError;
use crate::keycloak::KeycloakClient;
use crate::resources::ResourceKind;
use tracing::{info, warn};

/// Resolves identifiers of any supported resource kind against one Keycloak.
#[derive(Debug)]
pub struct Resolver {
    client: KeycloakClient,
}

impl Resolver {
    #[must_use]
    pub fn new(client: KeycloakClient) -> Self {
        Self { client }
    }

    /// Build the Keycloak client from provider configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built or the initial login fails.
    pub async fn from_config(config: &ProviderConfig) -> Result<Self, LookupError> {
        let client = KeycloakClient::new(config).await?;
        Ok(Self::new(client))
    }

    /// Resolve the identifier of a `kind` object.
    ///
    /// # Errors
    ///
    /// See [`resolve_id`].
    pub async fn resolve(
        &self,
        kind: ResourceKind,
        external_name: &str,
        parameters: &Parameters,
    ) -> Result<Option<String>, LookupError> {
        let result = resolve_id(kind.lookup(), external_name, parameters, &self.client).await;

        match &result {
            Ok(Some(id)) => info!(kind = %kind, id = %id, "Resolved Keycloak object"),
            Ok(None) => info!(kind = %kind, "Keycloak object not found yet"),
            Err(e) => warn!(
                kind = %kind,
                reason = e.reason(),
                status = ?e.status_code(),
                error = %e,
                "Failed to resolve Keycloak object"
            ),
        }

        result
    }
}
