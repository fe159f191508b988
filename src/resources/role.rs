// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Realm and client role lookup.

use crate::constants::{PARAM_CLIENT_ID, PARAM_NAME, PARAM_REALM_ID};
use crate::errors::LookupError;
use crate::keycloak::KeycloakClient;
use crate::lookup::{IdentifyingPropertiesLookup, Parameters};

/// `keycloak_role`: realm role, or client role when `client_id` is set.
///
/// `client_id` is the internal id of the client, not its OIDC client id.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleLookup;

#[async_trait::async_trait]
impl IdentifyingPropertiesLookup for RoleLookup {
    fn required_parameters(&self) -> &'static [&'static str] {
        &[PARAM_REALM_ID, PARAM_NAME]
    }

    fn optional_parameters(&self) -> &'static [&'static str] {
        &[PARAM_CLIENT_ID]
    }

    async fn id_by_external_name(
        &self,
        id: &str,
        params: &Parameters,
        client: &KeycloakClient,
    ) -> Result<String, LookupError> {
        let realm = params.get_str(PARAM_REALM_ID)?;
        let role = client.get_role(realm, id).await?;
        Ok(role.id)
    }

    async fn id_by_identifying_properties(
        &self,
        params: &Parameters,
        client: &KeycloakClient,
    ) -> Result<Option<String>, LookupError> {
        let realm = params.get_str(PARAM_REALM_ID)?;
        let name = params.get_str(PARAM_NAME)?;
        let client_id = params.get_str(PARAM_CLIENT_ID)?;

        let role = if client_id.is_empty() {
            client.realm_role_by_name(realm, name).await?
        } else {
            client.client_role_by_name(realm, client_id, name).await?
        };
        Ok(role.map(|role| role.id))
    }
}
