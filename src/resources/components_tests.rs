// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Tests for component-backed lookups.

#[cfg(test)]
mod tests {
    use crate::errors::LookupError;
    use crate::lookup::resolve_id;
    use crate::resources::components::{component_id, LDAP_USER_FEDERATION, REALM_KEYSTORE_RSA};
    use crate::resources::test_support::{mock_keycloak, params};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn test_keystore_filters_by_provider_id() {
        let (server, client) = mock_keycloak().await;
        Mock::given(method("GET"))
            .and(path("/admin/realms/demo/components"))
            .and(query_param("type", "org.keycloak.keys.KeyProvider"))
            .and(query_param("parent", "demo"))
            .and(query_param("name", "signing"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "k-hmac", "name": "signing", "providerId": "hmac-generated" },
                { "id": "k-rsa", "name": "signing", "providerId": "rsa" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let id = resolve_id(
            &REALM_KEYSTORE_RSA,
            "",
            &params(&[("realm_id", "demo"), ("name", "signing")]),
            &client,
        )
        .await
        .unwrap();

        assert_eq!(id.as_deref(), Some("k-rsa"));
    }

    #[tokio::test]
    async fn test_ldap_federation_found_by_external_name() {
        let (server, client) = mock_keycloak().await;
        Mock::given(method("GET"))
            .and(path("/admin/realms/demo/components/ldap-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "ldap-1", "name": "corp-ldap", "providerId": "ldap",
                "providerType": "org.keycloak.storage.UserStorageProvider"
            })))
            .mount(&server)
            .await;

        let id = resolve_id(
            &LDAP_USER_FEDERATION,
            "ldap-1",
            &params(&[("realm_id", "demo"), ("name", "corp-ldap")]),
            &client,
        )
        .await
        .unwrap();

        assert_eq!(id.as_deref(), Some("ldap-1"));
    }

    #[tokio::test]
    async fn test_duplicate_component_names_are_ambiguous() {
        let (server, client) = mock_keycloak().await;
        Mock::given(method("GET"))
            .and(path("/admin/realms/demo/components"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "l-1", "name": "corp-ldap", "providerId": "ldap" },
                { "id": "l-2", "name": "corp-ldap", "providerId": "ldap" }
            ])))
            .mount(&server)
            .await;

        let err = component_id(
            &client,
            "demo",
            "org.keycloak.storage.UserStorageProvider",
            "ldap",
            "corp-ldap",
        )
        .await
        .unwrap_err();

        assert!(matches!(err, LookupError::Ambiguous { count: 2 }));
    }

    #[tokio::test]
    async fn test_no_component_is_none() {
        let (server, client) = mock_keycloak().await;
        Mock::given(method("GET"))
            .and(path("/admin/realms/demo/components"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let id = component_id(&client, "demo", "org.keycloak.keys.KeyProvider", "rsa", "x")
            .await
            .unwrap();

        assert_eq!(id, None);
    }
}
