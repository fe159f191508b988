// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! End-to-end resolution against a mock Keycloak admin API
//!
//! These tests drive the public API the way a provider does: load the
//! credentials document, build a resolver and resolve ids by kind name.
//!
//! Run with: cargo test --test resolve_integration

mod common;

use common::{start_keycloak, write_credentials};
use keycloak_lookup::config::ProviderConfig;
use keycloak_lookup::errors::LookupError;
use keycloak_lookup::lookup::{Parameters, Resolver};
use keycloak_lookup::resources::ResourceKind;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REALM: &str = "platform";

async fn resolver_for(server: &MockServer) -> Resolver {
    let credentials = write_credentials(server, REALM);
    let config = ProviderConfig::from_file(credentials.path())
        .await
        .expect("credentials should parse");
    Resolver::from_config(&config)
        .await
        .expect("login should succeed")
}

fn params(pairs: &[(&str, &str)]) -> Parameters {
    pairs.iter().map(|&(key, value)| (key, value)).collect()
}

#[tokio::test]
async fn test_group_relinked_after_stale_external_name() {
    let server = start_keycloak(REALM).await;
    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/groups/deleted-id"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "Could not find group by id"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/groups"))
        .and(query_param("search", "developers"))
        .and(header("authorization", "Bearer integration-token"))
        .and(header("x-test", "integration"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "g-dev", "name": "developers", "path": "/developers" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = resolver_for(&server).await;
    let kind: ResourceKind = "keycloak_group".parse().unwrap();

    let id = resolver
        .resolve(
            kind,
            "deleted-id",
            &params(&[("realm_id", "demo"), ("name", "developers")]),
        )
        .await
        .unwrap();

    assert_eq!(id.as_deref(), Some("g-dev"));
}

#[tokio::test]
async fn test_valid_external_name_skips_search() {
    let server = start_keycloak(REALM).await;
    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/authentication/flows/f-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": "f-1", "alias": "sso" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/authentication/flows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let resolver = resolver_for(&server).await;
    let id = resolver
        .resolve(
            ResourceKind::AuthenticationFlow,
            "f-1",
            &params(&[("realm_id", "demo"), ("alias", "sso")]),
        )
        .await
        .unwrap();

    assert_eq!(id.as_deref(), Some("f-1"));
}

#[tokio::test]
async fn test_unresolvable_object_is_empty() {
    let server = start_keycloak(REALM).await;
    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/clients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let resolver = resolver_for(&server).await;
    let id = resolver
        .resolve(
            ResourceKind::OpenIdClient,
            "",
            &params(&[("realm_id", "demo"), ("client_id", "backend")]),
        )
        .await
        .unwrap();

    assert_eq!(id, None);
}

#[tokio::test]
async fn test_ambiguous_mappers_fail() {
    let server = start_keycloak(REALM).await;
    Mock::given(method("GET"))
        .and(path(
            "/admin/realms/demo/client-scopes/profile/protocol-mappers/models",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "m-1", "name": "locale" },
            { "id": "m-2", "name": "locale" }
        ])))
        .mount(&server)
        .await;

    let resolver = resolver_for(&server).await;
    let err = resolver
        .resolve(
            ResourceKind::GenericProtocolMapper,
            "",
            &params(&[
                ("realm_id", "demo"),
                ("name", "locale"),
                ("client_scope_id", "profile"),
            ]),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::Ambiguous { count: 2 }));
    assert_eq!(err.reason(), "AmbiguousIdentifyingProperties");
    assert!(!err.is_transient());
}

#[tokio::test]
async fn test_missing_parameter_fails_before_any_request() {
    let server = start_keycloak(REALM).await;
    let resolver = resolver_for(&server).await;

    let err = resolver
        .resolve(
            ResourceKind::AuthenticationSubflow,
            "",
            &params(&[("realm_id", "demo"), ("alias", "otp")]),
        )
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "required param 'parent_flow_alias' not set");
    let admin_requests = server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.url.path().starts_with("/admin/"))
        .count();
    assert_eq!(admin_requests, 0);
}

#[tokio::test]
async fn test_rejected_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/realms/{REALM}/protocol/openid-connect/token")))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "unauthorized_client"
        })))
        .mount(&server)
        .await;

    let credentials = write_credentials(&server, REALM);
    let config = ProviderConfig::from_file(credentials.path()).await.unwrap();
    let err = Resolver::from_config(&config).await.unwrap_err();

    assert_eq!(err.reason(), "KeycloakAuthFailed");
    assert_eq!(err.status_code(), Some(401));
}
