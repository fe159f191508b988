// Common test utilities for integration tests

use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a mock Keycloak whose token endpoint accepts the test credentials
pub async fn start_keycloak(realm: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/realms/{realm}/protocol/openid-connect/token")))
        .and(body_string_contains("client_id=crossplane"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": "integration-token", "expires_in": 60 })),
        )
        .mount(&server)
        .await;
    server
}

/// Write a provider credentials document pointing at `server`
pub fn write_credentials(server: &MockServer, realm: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create credentials file");
    let credentials = json!({
        "url": server.uri(),
        "client_id": "crossplane",
        "client_secret": "integration-secret",
        "realm": realm,
        "initial_login": "true",
        "client_timeout": "5",
        "additional_headers": "{\"X-Test\":\"integration\"}"
    });
    write!(file, "{credentials}").expect("write credentials file");
    file
}
