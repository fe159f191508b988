// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Organization endpoints.

use super::types::Organization;
use super::KeycloakClient;
use crate::errors::KeycloakError;

impl KeycloakClient {
    /// Get an organization by id.
    ///
    /// # Errors
    ///
    /// Returns `KeycloakError::Api` with status 404 if the organization does not exist.
    pub async fn get_organization(
        &self,
        realm: &str,
        id: &str,
    ) -> Result<Organization, KeycloakError> {
        self.get(realm, &["organizations", id], &[]).await
    }

    /// Find an organization by its exact name.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn organization_by_name(
        &self,
        realm: &str,
        name: &str,
    ) -> Result<Option<Organization>, KeycloakError> {
        let organizations: Vec<Organization> = self
            .get(
                realm,
                &["organizations"],
                &[("search", name), ("exact", "true")],
            )
            .await?;
        Ok(organizations.into_iter().find(|org| org.name == name))
    }
}
