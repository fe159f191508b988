// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Identifying-properties lookups for each supported Keycloak resource.
//!
//! Every resource kind is known under two names: a short CLI name
//! (`authentication-flow`) and the Terraform resource name
//! (`keycloak_authentication_flow`). [`ResourceKind`] parses both and maps a
//! kind to its [`IdentifyingPropertiesLookup`].

pub mod authentication;
pub mod components;
pub mod group;
pub mod openid_client;
pub mod organization;
pub mod protocol_mapper;
pub mod role;

use crate::errors::UnknownResourceKind;
use crate::lookup::IdentifyingPropertiesLookup;
use authentication::{
    AuthenticationExecutionConfigLookup, AuthenticationExecutionLookup, AuthenticationFlowLookup,
    AuthenticationSubflowLookup,
};
use components::{LDAP_USER_FEDERATION, REALM_KEYSTORE_RSA};
use group::GroupLookup;
use openid_client::OpenIdClientLookup;
use organization::OrganizationLookup;
use protocol_mapper::GenericProtocolMapperLookup;
use role::RoleLookup;
use std::fmt;
use std::str::FromStr;

/// Keycloak resource kinds that can be resolved from identifying properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    AuthenticationFlow,
    AuthenticationSubflow,
    AuthenticationExecution,
    AuthenticationExecutionConfig,
    Organization,
    Role,
    Group,
    OpenIdClient,
    RealmKeystoreRsa,
    LdapUserFederation,
    GenericProtocolMapper,
}

impl ResourceKind {
    /// All kinds, in display order.
    pub const ALL: [ResourceKind; 11] = [
        Self::AuthenticationFlow,
        Self::AuthenticationSubflow,
        Self::AuthenticationExecution,
        Self::AuthenticationExecutionConfig,
        Self::Organization,
        Self::Role,
        Self::Group,
        Self::OpenIdClient,
        Self::RealmKeystoreRsa,
        Self::LdapUserFederation,
        Self::GenericProtocolMapper,
    ];

    /// Short kebab-case name used on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::AuthenticationFlow => "authentication-flow",
            Self::AuthenticationSubflow => "authentication-subflow",
            Self::AuthenticationExecution => "authentication-execution",
            Self::AuthenticationExecutionConfig => "authentication-execution-config",
            Self::Organization => "organization",
            Self::Role => "role",
            Self::Group => "group",
            Self::OpenIdClient => "openid-client",
            Self::RealmKeystoreRsa => "realm-keystore-rsa",
            Self::LdapUserFederation => "ldap-user-federation",
            Self::GenericProtocolMapper => "generic-protocol-mapper",
        }
    }

    /// Terraform resource name of the kind.
    #[must_use]
    pub fn terraform_name(self) -> &'static str {
        match self {
            Self::AuthenticationFlow => "keycloak_authentication_flow",
            Self::AuthenticationSubflow => "keycloak_authentication_subflow",
            Self::AuthenticationExecution => "keycloak_authentication_execution",
            Self::AuthenticationExecutionConfig => "keycloak_authentication_execution_config",
            Self::Organization => "keycloak_organization",
            Self::Role => "keycloak_role",
            Self::Group => "keycloak_group",
            Self::OpenIdClient => "keycloak_openid_client",
            Self::RealmKeystoreRsa => "keycloak_realm_keystore_rsa",
            Self::LdapUserFederation => "keycloak_ldap_user_federation",
            Self::GenericProtocolMapper => "keycloak_generic_protocol_mapper",
        }
    }

    /// Lookup strategy of the kind.
    #[must_use]
    pub fn lookup(self) -> &'static dyn IdentifyingPropertiesLookup {
        match self {
            Self::AuthenticationFlow => &AuthenticationFlowLookup,
            Self::AuthenticationSubflow => &AuthenticationSubflowLookup,
            Self::AuthenticationExecution => &AuthenticationExecutionLookup,
            Self::AuthenticationExecutionConfig => &AuthenticationExecutionConfigLookup,
            Self::Organization => &OrganizationLookup,
            Self::Role => &RoleLookup,
            Self::Group => &GroupLookup,
            Self::OpenIdClient => &OpenIdClientLookup,
            Self::RealmKeystoreRsa => &REALM_KEYSTORE_RSA,
            Self::LdapUserFederation => &LDAP_USER_FEDERATION,
            Self::GenericProtocolMapper => &GenericProtocolMapperLookup,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResourceKind {
    type Err = UnknownResourceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s || kind.terraform_name() == s)
            .ok_or_else(|| UnknownResourceKind {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
pub(crate) mod test_support;
