// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Authentication flow, execution and execution config endpoints.

use super::types::{
    AuthenticationExecution, AuthenticationExecutionConfig, AuthenticationExecutionInfo,
    AuthenticationFlow,
};
use super::KeycloakClient;
use crate::errors::KeycloakError;
use tracing::debug;

impl KeycloakClient {
    /// Get a flow (top-level or subflow) by id.
    ///
    /// # Errors
    ///
    /// Returns `KeycloakError::Api` with status 404 if the flow does not exist.
    pub async fn get_authentication_flow(
        &self,
        realm: &str,
        id: &str,
    ) -> Result<AuthenticationFlow, KeycloakError> {
        self.get(realm, &["authentication", "flows", id], &[]).await
    }

    /// List the top-level flows of a realm.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_authentication_flows(
        &self,
        realm: &str,
    ) -> Result<Vec<AuthenticationFlow>, KeycloakError> {
        self.get(realm, &["authentication", "flows"], &[]).await
    }

    /// Find a top-level flow by alias.
    ///
    /// Keycloak enforces unique aliases per realm, so at most one flow matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn authentication_flow_from_alias(
        &self,
        realm: &str,
        alias: &str,
    ) -> Result<Option<AuthenticationFlow>, KeycloakError> {
        let flows = self.list_authentication_flows(realm).await?;
        let found = flows.into_iter().find(|flow| flow.alias == alias);
        if found.is_none() {
            debug!(realm = %realm, alias = %alias, "No authentication flow found for alias");
        }
        Ok(found)
    }

    /// Get a subflow by id.
    ///
    /// Subflows are flows like any other in the admin API; the parent alias
    /// only scopes the lookup for callers and is not verified here.
    ///
    /// # Errors
    ///
    /// Returns `KeycloakError::Api` with status 404 if the flow does not exist.
    pub async fn get_authentication_subflow(
        &self,
        realm: &str,
        parent_flow_alias: &str,
        id: &str,
    ) -> Result<AuthenticationFlow, KeycloakError> {
        debug!(
            realm = %realm,
            parent_flow_alias = %parent_flow_alias,
            id = %id,
            "Fetching authentication subflow"
        );
        self.get_authentication_flow(realm, id).await
    }

    /// List the executions and subflows of a flow, including nested ones.
    ///
    /// # Errors
    ///
    /// Returns `KeycloakError::Api` with status 404 if the flow does not exist.
    pub async fn list_authentication_executions(
        &self,
        realm: &str,
        flow_alias: &str,
    ) -> Result<Vec<AuthenticationExecutionInfo>, KeycloakError> {
        self.get(
            realm,
            &["authentication", "flows", flow_alias, "executions"],
            &[],
        )
        .await
    }

    /// Get a single execution by id.
    ///
    /// # Errors
    ///
    /// Returns `KeycloakError::Api` with status 404 if the execution does not exist.
    pub async fn get_authentication_execution(
        &self,
        realm: &str,
        id: &str,
    ) -> Result<AuthenticationExecution, KeycloakError> {
        self.get(realm, &["authentication", "executions", id], &[])
            .await
    }

    /// Get an execution's authenticator config by id.
    ///
    /// # Errors
    ///
    /// Returns `KeycloakError::Api` with status 404 if the config does not exist.
    pub async fn get_authentication_execution_config(
        &self,
        realm: &str,
        id: &str,
    ) -> Result<AuthenticationExecutionConfig, KeycloakError> {
        self.get(realm, &["authentication", "config", id], &[]).await
    }
}
