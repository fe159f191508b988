// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `config.rs`

#[cfg(test)]
mod tests {
    use crate::config::ProviderConfig;
    use crate::errors::ConfigError;
    use serde_json::{json, Map, Value};
    use std::io::Write;
    use std::time::Duration;

    fn credentials(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_minimal_configuration_uses_defaults() {
        let config = ProviderConfig::from_credentials(&credentials(json!({
            "url": "http://localhost:8080",
            "client_id": "admin-cli",
        })))
        .unwrap();

        assert_eq!(config.realm, "master");
        assert!(config.initial_login);
        assert_eq!(config.client_timeout, Duration::from_secs(15));
        assert!(!config.tls_insecure_skip_verify);
        assert!(config.client_secret.is_none());
        assert!(config.additional_headers.is_empty());
        assert!(!config.uses_password_grant());
    }

    #[test]
    fn test_missing_url_is_rejected() {
        let err = ProviderConfig::from_credentials(&credentials(json!({
            "client_id": "admin-cli",
        })))
        .unwrap_err();

        assert!(matches!(err, ConfigError::MissingKey { ref key } if key == "url"));
    }

    #[test]
    fn test_empty_client_id_is_rejected() {
        let err = ProviderConfig::from_credentials(&credentials(json!({
            "url": "http://localhost:8080",
            "client_id": "",
        })))
        .unwrap_err();

        assert!(matches!(err, ConfigError::MissingKey { ref key } if key == "client_id"));
    }

    #[test]
    fn test_string_typed_values_are_parsed() {
        let config = ProviderConfig::from_credentials(&credentials(json!({
            "url": "https://sso.example.com",
            "client_id": "crossplane",
            "client_secret": "s3cr3t",
            "realm": "ops",
            "initial_login": "false",
            "client_timeout": "30",
            "tls_insecure_skip_verify": "true",
        })))
        .unwrap();

        assert_eq!(config.realm, "ops");
        assert!(!config.initial_login);
        assert_eq!(config.client_timeout, Duration::from_secs(30));
        assert!(config.tls_insecure_skip_verify);
        assert_eq!(config.client_secret.as_deref(), Some("s3cr3t"));
    }

    #[test]
    fn test_native_json_values_are_parsed() {
        let config = ProviderConfig::from_credentials(&credentials(json!({
            "url": "https://sso.example.com",
            "client_id": "crossplane",
            "initial_login": false,
            "client_timeout": 5,
        })))
        .unwrap();

        assert!(!config.initial_login);
        assert_eq!(config.client_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_boolean_names_the_key() {
        let err = ProviderConfig::from_credentials(&credentials(json!({
            "url": "https://sso.example.com",
            "client_id": "crossplane",
            "initial_login": "sometimes",
        })))
        .unwrap_err();

        assert!(err.to_string().contains("initial_login"));
    }

    #[test]
    fn test_negative_timeout_is_rejected() {
        let err = ProviderConfig::from_credentials(&credentials(json!({
            "url": "https://sso.example.com",
            "client_id": "crossplane",
            "client_timeout": -1,
        })))
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "client_timeout"));
    }

    #[test]
    fn test_additional_headers_as_object_or_encoded_string() {
        let from_object = ProviderConfig::from_credentials(&credentials(json!({
            "url": "https://sso.example.com",
            "client_id": "crossplane",
            "additional_headers": { "X-Tenant": "blue" },
        })))
        .unwrap();
        let from_string = ProviderConfig::from_credentials(&credentials(json!({
            "url": "https://sso.example.com",
            "client_id": "crossplane",
            "additional_headers": "{\"X-Tenant\": \"blue\"}",
        })))
        .unwrap();

        assert_eq!(from_object.additional_headers, from_string.additional_headers);
        assert_eq!(
            from_object.additional_headers.get("X-Tenant").map(String::as_str),
            Some("blue")
        );
    }

    #[test]
    fn test_password_grant_requires_both_username_and_password() {
        let only_user = ProviderConfig::from_credentials(&credentials(json!({
            "url": "https://sso.example.com",
            "client_id": "admin-cli",
            "username": "admin",
        })))
        .unwrap();
        assert!(!only_user.uses_password_grant());

        let both = ProviderConfig::from_credentials(&credentials(json!({
            "url": "https://sso.example.com",
            "client_id": "admin-cli",
            "username": "admin",
            "password": "admin",
        })))
        .unwrap();
        assert!(both.uses_password_grant());
    }

    #[test]
    fn test_server_url_joins_base_path() {
        let mut config = ProviderConfig::new("http://localhost:8080/", "admin-cli");
        assert_eq!(config.server_url(), "http://localhost:8080");

        config.base_path = "/auth/".to_string();
        assert_eq!(config.server_url(), "http://localhost:8080/auth");

        config.base_path = "auth".to_string();
        assert_eq!(config.server_url(), "http://localhost:8080/auth");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let mut config = ProviderConfig::new("http://localhost:8080", "admin-cli");
        config.password = Some("hunter2".to_string());
        config.client_secret = Some("topsecret".to_string());

        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("topsecret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[tokio::test]
    async fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"url": "http://localhost:8080", "client_id": "admin-cli", "realm": "ops"}}"#
        )
        .unwrap();

        let config = ProviderConfig::from_file(file.path()).await.unwrap();
        assert_eq!(config.realm, "ops");
    }

    #[tokio::test]
    async fn test_from_file_rejects_non_object() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2, 3]").unwrap();

        let err = ProviderConfig::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProviderConfig::from_file(&dir.path().join("absent.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
