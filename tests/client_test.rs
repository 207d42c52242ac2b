//! Integration tests for the eSignLive client.

use esignlive::{ClientConfig, EslClient, EslError, PackageId};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> EslClient {
    EslClient::new("test_api_key", server.uri()).unwrap()
}

#[tokio::test]
async fn test_client_creation() {
    let client = EslClient::new("test_api_key", "https://sandbox.esignlive.com/api").unwrap();
    assert!(client.base_url().starts_with("https://"));
}

#[tokio::test]
async fn test_client_with_custom_config() {
    let client = EslClient::with_config(
        "test_api_key",
        ClientConfig {
            base_url: Some("https://custom.api.com/".to_string()),
            timeout: Some(Duration::from_secs(60)),
            user_agent: Some("test-agent/1.0".to_string()),
        },
    )
    .unwrap();
    assert_eq!(client.base_url(), "https://custom.api.com");
}

#[tokio::test]
async fn test_empty_api_key_is_rejected() {
    let result = EslClient::new("", "https://sandbox.esignlive.com/api");
    assert!(matches!(result, Err(EslError::Validation { .. })));
}

#[tokio::test]
async fn test_request_carries_basic_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/packages/pkg-1"))
        .and(header("Authorization", "Basic test_api_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "pkg-1",
            "name": "Lease",
            "status": "DRAFT"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let package = client_for(&mock_server)
        .get_package(&PackageId::new("pkg-1"))
        .await
        .unwrap();
    assert_eq!(package.name(), "Lease");
}

#[tokio::test]
async fn test_trailing_slash_is_stripped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sessions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "sessionId": "tok" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = EslClient::new("test_api_key", format!("{}/", mock_server.uri())).unwrap();
    let token = client.create_sender_session_token().await.unwrap();
    assert_eq!(token.session_id, "tok");
}

#[tokio::test]
async fn test_unauthorized_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/packages/pkg-1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "messageKey": "error.unauthorised.noApiKey",
            "message": "Missing or invalid api key.",
            "code": 401,
            "name": "Unauthorized"
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .get_package(&PackageId::new("pkg-1"))
        .await
        .unwrap_err();

    assert!(err.is_auth_error());
    assert_eq!(err.message_key(), Some("error.unauthorised.noApiKey"));
}

#[tokio::test]
async fn test_not_found_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/packages/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "messageKey": "error.notFound",
            "message": "Package not found.",
            "technical": "No package with id missing",
            "code": 404,
            "name": "Resource Not Found"
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .get_package(&PackageId::new("missing"))
        .await
        .unwrap_err();

    match err {
        EslError::Server {
            message_key,
            technical,
            status_code,
            ..
        } => {
            assert_eq!(message_key, "error.notFound");
            assert_eq!(technical.as_deref(), Some("No package with id missing"));
            assert_eq!(status_code, 404);
        }
        other => panic!("Expected Server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/packages/pkg-1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .get_package(&PackageId::new("pkg-1"))
        .await
        .unwrap_err();

    assert_eq!(err.message_key(), Some("unknown"));
    assert_eq!(err.status_code(), Some(503));
}
