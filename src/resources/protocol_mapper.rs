// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Generic protocol mapper lookup.

use crate::constants::{PARAM_CLIENT_ID, PARAM_CLIENT_SCOPE_ID, PARAM_NAME, PARAM_REALM_ID};
use crate::errors::LookupError;
use crate::keycloak::{KeycloakClient, MapperOwner};
use crate::lookup::{single_or_empty, IdentifyingPropertiesLookup, Parameters};

/// `keycloak_generic_protocol_mapper`: mapper of a client or of a client scope.
///
/// Exactly one of `client_id` and `client_scope_id` must be set.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericProtocolMapperLookup;

/// Owner of the mapper named by the parameters.
fn mapper_owner(params: &Parameters) -> Result<MapperOwner<'_>, LookupError> {
    let client_id = params.get_str(PARAM_CLIENT_ID)?;
    let client_scope_id = params.get_str(PARAM_CLIENT_SCOPE_ID)?;

    match (client_id.is_empty(), client_scope_id.is_empty()) {
        (false, true) => Ok(MapperOwner::Client(client_id)),
        (true, false) => Ok(MapperOwner::ClientScope(client_scope_id)),
        (true, true) => Err(LookupError::InvalidParameter {
            key: PARAM_CLIENT_ID.to_string(),
            reason: format!("one of '{PARAM_CLIENT_ID}' or '{PARAM_CLIENT_SCOPE_ID}' must be set"),
        }),
        (false, false) => Err(LookupError::InvalidParameter {
            key: PARAM_CLIENT_ID.to_string(),
            reason: format!(
                "'{PARAM_CLIENT_ID}' and '{PARAM_CLIENT_SCOPE_ID}' are mutually exclusive"
            ),
        }),
    }
}

#[async_trait::async_trait]
impl IdentifyingPropertiesLookup for GenericProtocolMapperLookup {
    fn required_parameters(&self) -> &'static [&'static str] {
        &[PARAM_REALM_ID, PARAM_NAME]
    }

    fn optional_parameters(&self) -> &'static [&'static str] {
        &[PARAM_CLIENT_ID, PARAM_CLIENT_SCOPE_ID]
    }

    async fn id_by_external_name(
        &self,
        id: &str,
        params: &Parameters,
        client: &KeycloakClient,
    ) -> Result<String, LookupError> {
        let realm = params.get_str(PARAM_REALM_ID)?;
        let owner = mapper_owner(params)?;
        let mapper = client.get_protocol_mapper(realm, owner, id).await?;
        Ok(mapper.id)
    }

    async fn id_by_identifying_properties(
        &self,
        params: &Parameters,
        client: &KeycloakClient,
    ) -> Result<Option<String>, LookupError> {
        let realm = params.get_str(PARAM_REALM_ID)?;
        let name = params.get_str(PARAM_NAME)?;
        let owner = mapper_owner(params)?;

        let mappers = client.list_protocol_mappers(realm, owner).await?;
        let matching: Vec<_> = mappers
            .into_iter()
            .filter(|mapper| mapper.name == name)
            .collect();
        single_or_empty(&matching, |mapper| mapper.id.as_str())
    }
}
