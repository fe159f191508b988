// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Identifier resolution from identifying properties.
//!
//! A managed resource normally records the identifier of its Keycloak object
//! (the external name). When that identifier is absent or stale, the object is
//! located again through its *identifying properties*: the fields that address
//! it uniquely inside Keycloak, such as realm and alias.
//!
//! Each resource kind implements [`IdentifyingPropertiesLookup`] and
//! [`resolve_id`] drives the shared algorithm:
//!
//! 1. Check that every required property is present and default the optional
//!    ones to the empty string
//! 2. If an external name is set, fetch the object by it; a 404 falls through
//!    and an empty id means the object is gone
//! 3. Search by identifying properties; no match is not an error, several
//!    matches are
//!
//! # Example
//!
//! ```rust,no_run
//! use keycloak_lookup::config::ProviderConfig;
//! use keycloak_lookup::lookup::{Parameters, Resolver};
//! use keycloak_lookup::resources::ResourceKind;
//! use std::path::Path;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ProviderConfig::from_file(Path::new("credentials.json")).await?;
//! let resolver = Resolver::from_config(&config).await?;
//!
//! let mut params = Parameters::new();
//! params.insert("realm_id", "demo");
//! params.insert("alias", "my-browser");
//!
//! match resolver.resolve(ResourceKind::AuthenticationFlow, "", &params).await? {
//!     Some(id) => println!("resolved {id}"),
//!     None => println!("not created yet"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod resolver;

pub use resolver::Resolver;

use crate::errors::LookupError;
use crate::keycloak::KeycloakClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Desired-state fields of a managed resource, keyed by Terraform argument name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(BTreeMap<String, Value>);

impl Parameters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value of a parameter.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::MissingRequiredParameter` if the key is absent and
    /// `LookupError::InvalidParameter` if the value is not a string.
    pub fn get_str(&self, key: &str) -> Result<&str, LookupError> {
        match self.0.get(key) {
            Some(Value::String(value)) => Ok(value),
            Some(other) => Err(LookupError::InvalidParameter {
                key: key.to_string(),
                reason: format!("expected a string, got {other}"),
            }),
            None => Err(LookupError::MissingRequiredParameter {
                key: key.to_string(),
            }),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, Value>> for Parameters {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Per-resource strategy for locating a Keycloak object.
///
/// The parameters handed to both strategies contain exactly the declared
/// required and optional keys; optional keys that were not set hold `""`.
#[async_trait::async_trait]
pub trait IdentifyingPropertiesLookup: Send + Sync {
    /// Keys that must be present in the parameters.
    fn required_parameters(&self) -> &'static [&'static str];

    /// Keys that are passed on when present and default to `""` otherwise.
    fn optional_parameters(&self) -> &'static [&'static str] {
        &[]
    }

    /// Fetch the object by its identifier and return the identifier Keycloak reports.
    ///
    /// # Errors
    ///
    /// A Keycloak 404 means the identifier is stale; [`resolve_id`] then falls
    /// back to [`Self::id_by_identifying_properties`]. Any other error aborts.
    async fn id_by_external_name(
        &self,
        id: &str,
        params: &Parameters,
        client: &KeycloakClient,
    ) -> Result<String, LookupError>;

    /// Search for the object by its identifying properties.
    ///
    /// Returns `None` when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Ambiguous` when several objects match.
    async fn id_by_identifying_properties(
        &self,
        params: &Parameters,
        client: &KeycloakClient,
    ) -> Result<Option<String>, LookupError>;
}

/// Keep only the declared keys, failing on a missing required one.
fn process_parameters(
    lookup: &dyn IdentifyingPropertiesLookup,
    parameters: &Parameters,
) -> Result<Parameters, LookupError> {
    let mut processed = Parameters::new();

    for &key in lookup.required_parameters() {
        let value = parameters
            .get(key)
            .ok_or_else(|| LookupError::MissingRequiredParameter {
                key: key.to_string(),
            })?;
        processed.insert(key, value.clone());
    }

    for &key in lookup.optional_parameters() {
        let value = parameters.get(key).cloned().unwrap_or_else(|| Value::from(""));
        processed.insert(key, value);
    }

    Ok(processed)
}

/// Resolve the identifier of a Keycloak object.
///
/// Returns `Ok(None)` when the object cannot be found yet. Callers treat that
/// as "not created" and retry once dependent fields are known.
///
/// # Errors
///
/// Returns an error if a required parameter is missing, the identifying
/// properties match more than one object, or a Keycloak call fails with
/// anything other than 404.
pub async fn resolve_id(
    lookup: &dyn IdentifyingPropertiesLookup,
    external_name: &str,
    parameters: &Parameters,
    client: &KeycloakClient,
) -> Result<Option<String>, LookupError> {
    let params = process_parameters(lookup, parameters)?;
    debug!(
        external_name = %external_name,
        params = ?params.keys().collect::<Vec<_>>(),
        "Resolving Keycloak object id"
    );

    if !external_name.is_empty() {
        match lookup
            .id_by_external_name(external_name, &params, client)
            .await
        {
            Ok(id) if id.is_empty() => {
                debug!(external_name = %external_name, "Lookup by external name returned no id");
                return Ok(None);
            }
            Ok(id) => {
                debug!(external_name = %external_name, id = %id, "Resolved by external name");
                return Ok(Some(id));
            }
            Err(e) if e.is_not_found() => {
                warn!(
                    external_name = %external_name,
                    "External name not found in Keycloak, falling back to identifying properties"
                );
            }
            Err(e) => return Err(e),
        }
    }

    match lookup.id_by_identifying_properties(&params, client).await {
        Ok(Some(id)) if !id.is_empty() => {
            debug!(id = %id, "Resolved by identifying properties");
            Ok(Some(id))
        }
        Ok(_) => {
            debug!("No object matches the identifying properties");
            Ok(None)
        }
        Err(e) if e.is_not_found() => {
            debug!(error = %e, "Identifying properties lookup hit 404, treating as not found");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Identifier of the only element, `None` for an empty list.
///
/// # Errors
///
/// Returns `LookupError::Ambiguous` when there is more than one element.
pub fn single_or_empty<T>(
    items: &[T],
    id_fn: impl Fn(&T) -> &str,
) -> Result<Option<String>, LookupError> {
    match items {
        [] => Ok(None),
        [item] => Ok(Some(id_fn(item).to_string())),
        _ => Err(LookupError::Ambiguous { count: items.len() }),
    }
}
