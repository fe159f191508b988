// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Lookups for authentication flows, subflows, executions and execution configs.
//!
//! Subflows and executions are only addressable through the execution list of
//! their parent flow. Entries with `level == 0` are direct children of the
//! parent; deeper levels belong to nested subflows and are ignored.

use crate::constants::{
    PARAM_ALIAS, PARAM_AUTHENTICATOR, PARAM_EXECUTION_ID, PARAM_PARENT_FLOW_ALIAS, PARAM_REALM_ID,
};
use crate::errors::LookupError;
use crate::keycloak::KeycloakClient;
use crate::lookup::{single_or_empty, IdentifyingPropertiesLookup, Parameters};
use tracing::debug;

/// `keycloak_authentication_flow`: top-level flow identified by realm and alias.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthenticationFlowLookup;

#[async_trait::async_trait]
impl IdentifyingPropertiesLookup for AuthenticationFlowLookup {
    fn required_parameters(&self) -> &'static [&'static str] {
        &[PARAM_REALM_ID, PARAM_ALIAS]
    }

    async fn id_by_external_name(
        &self,
        id: &str,
        params: &Parameters,
        client: &KeycloakClient,
    ) -> Result<String, LookupError> {
        let realm = params.get_str(PARAM_REALM_ID)?;
        let flow = client.get_authentication_flow(realm, id).await?;
        Ok(flow.id)
    }

    async fn id_by_identifying_properties(
        &self,
        params: &Parameters,
        client: &KeycloakClient,
    ) -> Result<Option<String>, LookupError> {
        let realm = params.get_str(PARAM_REALM_ID)?;
        let alias = params.get_str(PARAM_ALIAS)?;
        let flow = client.authentication_flow_from_alias(realm, alias).await?;
        Ok(flow.map(|flow| flow.id))
    }
}

/// `keycloak_authentication_subflow`: subflow identified by its parent's alias and its own alias.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthenticationSubflowLookup;

#[async_trait::async_trait]
impl IdentifyingPropertiesLookup for AuthenticationSubflowLookup {
    fn required_parameters(&self) -> &'static [&'static str] {
        &[PARAM_REALM_ID, PARAM_PARENT_FLOW_ALIAS, PARAM_ALIAS]
    }

    async fn id_by_external_name(
        &self,
        id: &str,
        params: &Parameters,
        client: &KeycloakClient,
    ) -> Result<String, LookupError> {
        let realm = params.get_str(PARAM_REALM_ID)?;
        let parent = params.get_str(PARAM_PARENT_FLOW_ALIAS)?;
        let subflow = client.get_authentication_subflow(realm, parent, id).await?;
        Ok(subflow.id)
    }

    /// First direct child subflow of the parent whose alias matches.
    async fn id_by_identifying_properties(
        &self,
        params: &Parameters,
        client: &KeycloakClient,
    ) -> Result<Option<String>, LookupError> {
        let realm = params.get_str(PARAM_REALM_ID)?;
        let parent = params.get_str(PARAM_PARENT_FLOW_ALIAS)?;
        let alias = params.get_str(PARAM_ALIAS)?;

        let executions = client.list_authentication_executions(realm, parent).await?;
        let flow_ids = executions
            .iter()
            .filter(|execution| execution.authentication_flow && execution.level == 0)
            .filter_map(|execution| execution.flow_id.as_deref());

        for flow_id in flow_ids {
            let subflow = client
                .get_authentication_subflow(realm, parent, flow_id)
                .await?;
            if subflow.alias == alias {
                return Ok(Some(subflow.id));
            }
        }

        debug!(realm = %realm, parent_flow_alias = %parent, alias = %alias, "No subflow with alias");
        Ok(None)
    }
}

/// `keycloak_authentication_execution`: execution identified by parent flow and authenticator.
///
/// Only one execution per authenticator can be managed directly under a flow;
/// duplicates have to be wrapped into subflows.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthenticationExecutionLookup;

#[async_trait::async_trait]
impl IdentifyingPropertiesLookup for AuthenticationExecutionLookup {
    fn required_parameters(&self) -> &'static [&'static str] {
        &[PARAM_REALM_ID, PARAM_PARENT_FLOW_ALIAS, PARAM_AUTHENTICATOR]
    }

    async fn id_by_external_name(
        &self,
        id: &str,
        params: &Parameters,
        client: &KeycloakClient,
    ) -> Result<String, LookupError> {
        let realm = params.get_str(PARAM_REALM_ID)?;
        let execution = client.get_authentication_execution(realm, id).await?;
        Ok(execution.id)
    }

    async fn id_by_identifying_properties(
        &self,
        params: &Parameters,
        client: &KeycloakClient,
    ) -> Result<Option<String>, LookupError> {
        let realm = params.get_str(PARAM_REALM_ID)?;
        let parent = params.get_str(PARAM_PARENT_FLOW_ALIAS)?;
        let authenticator = params.get_str(PARAM_AUTHENTICATOR)?;

        let executions = client.list_authentication_executions(realm, parent).await?;
        let matching: Vec<_> = executions
            .into_iter()
            .filter(|execution| {
                !execution.authentication_flow
                    && execution.level == 0
                    && execution.provider_id.as_deref() == Some(authenticator)
            })
            .collect();

        single_or_empty(&matching, |execution| execution.id.as_str())
    }
}

/// `keycloak_authentication_execution_config`: config attached to an execution.
///
/// Configs are 1:1 with their execution, so a stale identifier is resolved by
/// creating a new config rather than searching for the old one.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthenticationExecutionConfigLookup;

#[async_trait::async_trait]
impl IdentifyingPropertiesLookup for AuthenticationExecutionConfigLookup {
    fn required_parameters(&self) -> &'static [&'static str] {
        &[PARAM_REALM_ID, PARAM_EXECUTION_ID]
    }

    async fn id_by_external_name(
        &self,
        id: &str,
        params: &Parameters,
        client: &KeycloakClient,
    ) -> Result<String, LookupError> {
        let realm = params.get_str(PARAM_REALM_ID)?;
        let config = client.get_authentication_execution_config(realm, id).await?;
        Ok(config.id)
    }

    async fn id_by_identifying_properties(
        &self,
        _params: &Parameters,
        _client: &KeycloakClient,
    ) -> Result<Option<String>, LookupError> {
        Ok(None)
    }
}

#[cfg(test)]
#[path = "authentication_tests.rs"]
mod authentication_tests;
