// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Component endpoints.
//!
//! Key providers and user federation providers are components without a
//! dedicated "find by name" endpoint, so they are located through the
//! filtered component list.

use super::types::Component;
use super::KeycloakClient;
use crate::errors::KeycloakError;

/// Filters for [`KeycloakClient::list_components`]. Unset filters are not sent.
#[derive(Clone, Copy, Debug, Default)]
pub struct ComponentQuery<'a> {
    /// Component type, e.g. `org.keycloak.keys.KeyProvider`
    pub provider_type: Option<&'a str>,
    /// Parent id (the realm id for top-level components)
    pub parent: Option<&'a str>,
    pub name: Option<&'a str>,
}

impl KeycloakClient {
    /// Get a component by id.
    ///
    /// # Errors
    ///
    /// Returns `KeycloakError::Api` with status 404 if the component does not exist.
    pub async fn get_component(&self, realm: &str, id: &str) -> Result<Component, KeycloakError> {
        self.get(realm, &["components", id], &[]).await
    }

    /// List components matching the given filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_components(
        &self,
        realm: &str,
        query: ComponentQuery<'_>,
    ) -> Result<Vec<Component>, KeycloakError> {
        let mut params = Vec::new();
        if let Some(provider_type) = query.provider_type {
            params.push(("type", provider_type));
        }
        if let Some(parent) = query.parent {
            params.push(("parent", parent));
        }
        if let Some(name) = query.name {
            params.push(("name", name));
        }
        self.get(realm, &["components"], &params).await
    }
}
