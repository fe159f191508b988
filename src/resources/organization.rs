// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Organization lookup.

use crate::constants::{PARAM_DOMAIN, PARAM_NAME, PARAM_REALM};
use crate::errors::LookupError;
use crate::keycloak::KeycloakClient;
use crate::lookup::{IdentifyingPropertiesLookup, Parameters};

/// `keycloak_organization`: organization identified by realm and name.
///
/// `domain` is required for the resource to be resolvable but names are
/// unique per realm, so the search only uses the name.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrganizationLookup;

#[async_trait::async_trait]
impl IdentifyingPropertiesLookup for OrganizationLookup {
    fn required_parameters(&self) -> &'static [&'static str] {
        &[PARAM_REALM, PARAM_NAME, PARAM_DOMAIN]
    }

    async fn id_by_external_name(
        &self,
        id: &str,
        params: &Parameters,
        client: &KeycloakClient,
    ) -> Result<String, LookupError> {
        let realm = params.get_str(PARAM_REALM)?;
        let organization = client.get_organization(realm, id).await?;
        Ok(organization.id)
    }

    async fn id_by_identifying_properties(
        &self,
        params: &Parameters,
        client: &KeycloakClient,
    ) -> Result<Option<String>, LookupError> {
        let realm = params.get_str(PARAM_REALM)?;
        let name = params.get_str(PARAM_NAME)?;
        let organization = client.organization_by_name(realm, name).await?;
        Ok(organization.map(|org| org.id))
    }
}
