// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Lookups for component-backed resources (key providers, user federation).
//!
//! Components have no "find by name" endpoint. They are listed with the type,
//! parent and name filters of `/components` and then narrowed down by
//! provider id, since several providers share one component type.

use crate::constants::{
    COMPONENT_TYPE_KEY_PROVIDER, COMPONENT_TYPE_USER_STORAGE, PARAM_NAME, PARAM_REALM_ID,
    PROVIDER_ID_LDAP, PROVIDER_ID_RSA,
};
use crate::errors::LookupError;
use crate::keycloak::components::ComponentQuery;
use crate::keycloak::KeycloakClient;
use crate::lookup::{single_or_empty, IdentifyingPropertiesLookup, Parameters};
use tracing::debug;

/// Id of the single component of `provider_type`/`provider_id` named `name`
/// directly below the realm.
///
/// # Errors
///
/// Returns `LookupError::Ambiguous` if several components match, since
/// Keycloak does not enforce unique component names.
pub async fn component_id(
    client: &KeycloakClient,
    realm: &str,
    provider_type: &str,
    provider_id: &str,
    name: &str,
) -> Result<Option<String>, LookupError> {
    let components = client
        .list_components(
            realm,
            ComponentQuery {
                provider_type: Some(provider_type),
                parent: Some(realm),
                name: Some(name),
            },
        )
        .await?;

    let matching: Vec<_> = components
        .into_iter()
        .filter(|component| component.provider_id == provider_id && component.name == name)
        .collect();

    debug!(
        realm = %realm,
        provider_type = %provider_type,
        provider_id = %provider_id,
        name = %name,
        matches = matching.len(),
        "Searched components"
    );

    single_or_empty(&matching, |component| component.id.as_str())
}

/// Component identified by realm and name, for one provider type and id.
#[derive(Debug, Clone, Copy)]
pub struct ComponentLookup {
    pub provider_type: &'static str,
    pub provider_id: &'static str,
}

/// `keycloak_realm_keystore_rsa`
pub const REALM_KEYSTORE_RSA: ComponentLookup = ComponentLookup {
    provider_type: COMPONENT_TYPE_KEY_PROVIDER,
    provider_id: PROVIDER_ID_RSA,
};

/// `keycloak_ldap_user_federation`
pub const LDAP_USER_FEDERATION: ComponentLookup = ComponentLookup {
    provider_type: COMPONENT_TYPE_USER_STORAGE,
    provider_id: PROVIDER_ID_LDAP,
};

#[async_trait::async_trait]
impl IdentifyingPropertiesLookup for ComponentLookup {
    fn required_parameters(&self) -> &'static [&'static str] {
        &[PARAM_REALM_ID, PARAM_NAME]
    }

    async fn id_by_external_name(
        &self,
        id: &str,
        params: &Parameters,
        client: &KeycloakClient,
    ) -> Result<String, LookupError> {
        let realm = params.get_str(PARAM_REALM_ID)?;
        let component = client.get_component(realm, id).await?;
        Ok(component.id)
    }

    async fn id_by_identifying_properties(
        &self,
        params: &Parameters,
        client: &KeycloakClient,
    ) -> Result<Option<String>, LookupError> {
        let realm = params.get_str(PARAM_REALM_ID)?;
        let name = params.get_str(PARAM_NAME)?;
        component_id(client, realm, self.provider_type, self.provider_id, name).await
    }
}

#[cfg(test)]
#[path = "components_tests.rs"]
mod components_tests;
