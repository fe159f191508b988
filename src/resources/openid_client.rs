// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! OpenID client lookup.

use crate::constants::{PARAM_CLIENT_ID, PARAM_REALM_ID};
use crate::errors::LookupError;
use crate::keycloak::KeycloakClient;
use crate::lookup::{single_or_empty, IdentifyingPropertiesLookup, Parameters};

/// `keycloak_openid_client`: client identified by realm and OIDC client id.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenIdClientLookup;

#[async_trait::async_trait]
impl IdentifyingPropertiesLookup for OpenIdClientLookup {
    fn required_parameters(&self) -> &'static [&'static str] {
        &[PARAM_REALM_ID, PARAM_CLIENT_ID]
    }

    async fn id_by_external_name(
        &self,
        id: &str,
        params: &Parameters,
        client: &KeycloakClient,
    ) -> Result<String, LookupError> {
        let realm = params.get_str(PARAM_REALM_ID)?;
        let found = client.get_client(realm, id).await?;
        Ok(found.id)
    }

    async fn id_by_identifying_properties(
        &self,
        params: &Parameters,
        client: &KeycloakClient,
    ) -> Result<Option<String>, LookupError> {
        let realm = params.get_str(PARAM_REALM_ID)?;
        let client_id = params.get_str(PARAM_CLIENT_ID)?;
        let clients = client.clients_by_client_id(realm, client_id).await?;
        single_or_empty(&clients, |found| found.id.as_str())
    }
}
