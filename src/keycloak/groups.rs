// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Group endpoints.

use super::types::Group;
use super::KeycloakClient;
use crate::errors::KeycloakError;

impl KeycloakClient {
    /// Get a group by id.
    ///
    /// # Errors
    ///
    /// Returns `KeycloakError::Api` with status 404 if the group does not exist.
    pub async fn get_group(&self, realm: &str, id: &str) -> Result<Group, KeycloakError> {
        self.get(realm, &["groups", id], &[]).await
    }

    /// Top-level groups named exactly `name`.
    ///
    /// The search endpoint also returns the ancestors of matching subgroups,
    /// so results are filtered by name here.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn top_level_groups_by_name(
        &self,
        realm: &str,
        name: &str,
    ) -> Result<Vec<Group>, KeycloakError> {
        let groups: Vec<Group> = self
            .get(
                realm,
                &["groups"],
                &[("search", name), ("exact", "true")],
            )
            .await?;
        Ok(groups.into_iter().filter(|group| group.name == name).collect())
    }

    /// Direct children of `parent` named exactly `name`.
    ///
    /// # Errors
    ///
    /// Returns `KeycloakError::Api` with status 404 if the parent does not exist.
    pub async fn child_groups_by_name(
        &self,
        realm: &str,
        parent: &str,
        name: &str,
    ) -> Result<Vec<Group>, KeycloakError> {
        let children: Vec<Group> = self
            .get(
                realm,
                &["groups", parent, "children"],
                &[("search", name), ("exact", "true")],
            )
            .await?;
        Ok(children
            .into_iter()
            .filter(|group| group.name == name)
            .collect())
    }
}
