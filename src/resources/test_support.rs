// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Mock Keycloak shared by the resource lookup tests.

use crate::config::ProviderConfig;
use crate::keycloak::KeycloakClient;
use crate::lookup::Parameters;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a mock Keycloak that accepts any login, and a client logged in to it.
pub(crate) async fn mock_keycloak() -> (MockServer, KeycloakClient) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/realms/master/protocol/openid-connect/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": "test-token", "expires_in": 300 })),
        )
        .mount(&server)
        .await;

    let mut config = ProviderConfig::new(server.uri(), "admin-cli");
    config.username = Some("admin".to_string());
    config.password = Some("admin".to_string());
    let client = KeycloakClient::new(&config)
        .await
        .expect("login against mock Keycloak");

    (server, client)
}

/// Mount a GET `path` answering with `status` and a JSON body.
pub(crate) async fn mock_get(
    server: &MockServer,
    request_path: &str,
    status: u16,
    body: serde_json::Value,
) {
    Mock::given(method("GET"))
        .and(path(request_path))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

pub(crate) fn params(pairs: &[(&str, &str)]) -> Parameters {
    pairs.iter().map(|&(key, value)| (key, value)).collect()
}
