// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Group lookup.

use crate::constants::{PARAM_NAME, PARAM_PARENT_ID, PARAM_REALM_ID};
use crate::errors::LookupError;
use crate::keycloak::KeycloakClient;
use crate::lookup::{single_or_empty, IdentifyingPropertiesLookup, Parameters};

/// `keycloak_group`: top-level group, or subgroup of `parent_id` when set.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupLookup;

#[async_trait::async_trait]
impl IdentifyingPropertiesLookup for GroupLookup {
    fn required_parameters(&self) -> &'static [&'static str] {
        &[PARAM_REALM_ID, PARAM_NAME]
    }

    fn optional_parameters(&self) -> &'static [&'static str] {
        &[PARAM_PARENT_ID]
    }

    async fn id_by_external_name(
        &self,
        id: &str,
        params: &Parameters,
        client: &KeycloakClient,
    ) -> Result<String, LookupError> {
        let realm = params.get_str(PARAM_REALM_ID)?;
        let group = client.get_group(realm, id).await?;
        Ok(group.id)
    }

    async fn id_by_identifying_properties(
        &self,
        params: &Parameters,
        client: &KeycloakClient,
    ) -> Result<Option<String>, LookupError> {
        let realm = params.get_str(PARAM_REALM_ID)?;
        let name = params.get_str(PARAM_NAME)?;
        let parent = params.get_str(PARAM_PARENT_ID)?;

        let groups = if parent.is_empty() {
            client.top_level_groups_by_name(realm, name).await?
        } else {
            client.child_groups_by_name(realm, parent, name).await?
        };
        single_or_empty(&groups, |group| group.id.as_str())
    }
}
