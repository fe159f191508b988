// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Client endpoints.

use super::types::Client;
use super::KeycloakClient;
use crate::errors::KeycloakError;

impl KeycloakClient {
    /// Get a client by its internal id.
    ///
    /// # Errors
    ///
    /// Returns `KeycloakError::Api` with status 404 if the client does not exist.
    pub async fn get_client(&self, realm: &str, id: &str) -> Result<Client, KeycloakError> {
        self.get(realm, &["clients", id], &[]).await
    }

    /// Clients whose OIDC/SAML `clientId` equals `client_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn clients_by_client_id(
        &self,
        realm: &str,
        client_id: &str,
    ) -> Result<Vec<Client>, KeycloakError> {
        let clients: Vec<Client> = self
            .get(realm, &["clients"], &[("clientId", client_id)])
            .await?;
        Ok(clients
            .into_iter()
            .filter(|client| client.client_id == client_id)
            .collect())
    }
}
