// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Realm and client role endpoints.

use super::types::Role;
use super::KeycloakClient;
use crate::errors::KeycloakError;

impl KeycloakClient {
    /// Get a realm or client role by id.
    ///
    /// # Errors
    ///
    /// Returns `KeycloakError::Api` with status 404 if the role does not exist.
    pub async fn get_role(&self, realm: &str, id: &str) -> Result<Role, KeycloakError> {
        self.get(realm, &["roles-by-id", id], &[]).await
    }

    /// Get a realm role by name; `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails for any reason other than 404.
    pub async fn realm_role_by_name(
        &self,
        realm: &str,
        name: &str,
    ) -> Result<Option<Role>, KeycloakError> {
        self.get_optional(realm, &["roles", name], &[]).await
    }

    /// Get a client role by name; `None` if the client or role does not exist.
    ///
    /// `client` is the client's internal id, not its OIDC `clientId`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails for any reason other than 404.
    pub async fn client_role_by_name(
        &self,
        realm: &str,
        client: &str,
        name: &str,
    ) -> Result<Option<Role>, KeycloakError> {
        self.get_optional(realm, &["clients", client, "roles", name], &[])
            .await
    }
}
