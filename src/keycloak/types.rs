// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Keycloak admin API representations.
//!
//! Only the fields needed to identify objects are modelled; everything else in
//! the JSON payloads is ignored.

use serde::Deserialize;
use std::collections::HashMap;

/// Top-level flow or subflow (`AuthenticationFlowRepresentation`).
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationFlow {
    pub id: String,
    pub alias: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub top_level: bool,
    #[serde(default)]
    pub built_in: bool,
}

/// Entry of a flow's execution list (`AuthenticationExecutionInfoRepresentation`).
///
/// Both plain executions and nested subflows appear in this list; subflows
/// have `authentication_flow` set and carry their flow id in `flow_id`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationExecutionInfo {
    pub id: String,
    #[serde(default)]
    pub requirement: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub authentication_flow: bool,
    #[serde(default)]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub flow_id: Option<String>,
    /// Nesting depth below the listed flow; 0 means a direct child
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub index: i32,
}

/// Single execution (`AuthenticationExecutionRepresentation`).
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationExecution {
    pub id: String,
    #[serde(default)]
    pub authenticator: Option<String>,
    /// Id of the owning flow
    #[serde(default)]
    pub parent_flow: Option<String>,
    #[serde(default)]
    pub requirement: Option<String>,
    #[serde(default)]
    pub priority: Option<i32>,
}

/// Authenticator configuration attached to an execution.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationExecutionConfig {
    pub id: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub config: HashMap<String, String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDomain {
    pub name: String,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub domains: Vec<OrganizationDomain>,
}

/// Realm or client role.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub client_role: bool,
    /// Realm id for realm roles, client id for client roles
    #[serde(default)]
    pub container_id: Option<String>,
    #[serde(default)]
    pub composite: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub sub_groups: Vec<Group>,
}

/// OpenID Connect or SAML client.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Internal id
    pub id: String,
    /// Client identifier used by OIDC/SAML
    pub client_id: String,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub enabled: bool,
}

/// Generic component (key providers, user storage, mappers).
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,
    pub name: String,
    pub provider_id: String,
    #[serde(default)]
    pub provider_type: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub config: HashMap<String, Vec<String>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolMapper {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub protocol_mapper: Option<String>,
    #[serde(default)]
    pub config: HashMap<String, String>,
}

/// Owner of a protocol mapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapperOwner<'a> {
    /// Internal id of a client
    Client(&'a str),
    /// Id of a client scope
    ClientScope(&'a str),
}

impl<'a> MapperOwner<'a> {
    /// Admin API collection segment and id of the owner.
    #[must_use]
    pub fn segments(&self) -> [&'a str; 2] {
        match *self {
            Self::Client(id) => ["clients", id],
            Self::ClientScope(id) => ["client-scopes", id],
        }
    }
}
