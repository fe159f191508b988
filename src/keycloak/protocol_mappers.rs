// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Protocol mapper endpoints of clients and client scopes.

use super::types::{MapperOwner, ProtocolMapper};
use super::KeycloakClient;
use crate::errors::KeycloakError;

impl KeycloakClient {
    /// Get a protocol mapper of a client or client scope by id.
    ///
    /// # Errors
    ///
    /// Returns `KeycloakError::Api` with status 404 if the owner or mapper does not exist.
    pub async fn get_protocol_mapper(
        &self,
        realm: &str,
        owner: MapperOwner<'_>,
        id: &str,
    ) -> Result<ProtocolMapper, KeycloakError> {
        let [collection, owner_id] = owner.segments();
        self.get(
            realm,
            &[collection, owner_id, "protocol-mappers", "models", id],
            &[],
        )
        .await
    }

    /// List the protocol mappers of a client or client scope.
    ///
    /// # Errors
    ///
    /// Returns `KeycloakError::Api` with status 404 if the owner does not exist.
    pub async fn list_protocol_mappers(
        &self,
        realm: &str,
        owner: MapperOwner<'_>,
    ) -> Result<Vec<ProtocolMapper>, KeycloakError> {
        let [collection, owner_id] = owner.segments();
        self.get(
            realm,
            &[collection, owner_id, "protocol-mappers", "models"],
            &[],
        )
        .await
    }
}
