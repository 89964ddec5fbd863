//! Integration tests for AuthzClient.
//!
//! Uses wiremock for HTTP mocking. Tests cover the decision mapping
//! (2xx/404/500/transport), the no-network validation short-circuit, and the
//! wire shape of the request (path, content type, body).

use gatecheck_client::{AuthorizationRequest, AuthzClient, AuthzConfig, AuthzError};
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CHECK_PATH: &str = "/v1/providers/activedirectory";

fn test_id() -> Uuid {
    Uuid::parse_str("7f9e8d3e-1d58-4b49-8d38-084dccd5b803").unwrap()
}

fn create_test_client(mock_server: &MockServer) -> AuthzClient {
    let config = AuthzConfig::default().with_base_url(mock_server.uri());
    AuthzClient::new(config).expect("failed to create client")
}

#[tokio::test]
async fn test_granted_on_200() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CHECK_PATH))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let granted = client
        .is_authorized_for(test_id(), "wss superuser")
        .await
        .expect("check failed");

    assert!(granted);
}

#[tokio::test]
async fn test_request_body_wire_shape() {
    let mock_server = MockServer::start().await;

    let expected_body = serde_json::json!({
        "ActiveDirectoryId": "7f9e8d3e-1d58-4b49-8d38-084dccd5b803",
        "Abilities": ["read", "write"]
    });

    Mock::given(method("POST"))
        .and(path(CHECK_PATH))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let granted = client
        .is_authorized(test_id(), ["read", "write"])
        .await
        .expect("check failed");

    assert!(granted);
}

#[tokio::test]
async fn test_any_2xx_grants() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CHECK_PATH))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let granted = client
        .is_authorized_for(test_id(), "read")
        .await
        .expect("check failed");

    assert!(granted);
}

#[tokio::test]
async fn test_denied_on_404() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CHECK_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let granted = client
        .is_authorized_for(test_id(), "bogus")
        .await
        .expect("check failed");

    assert!(!granted);
}

#[tokio::test]
async fn test_denied_on_403() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CHECK_PATH))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let granted = client
        .is_authorized_for(test_id(), "read")
        .await
        .expect("check failed");

    assert!(!granted);
}

#[tokio::test]
async fn test_service_error_on_500_carries_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CHECK_PATH))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("ability store unavailable")
                .insert_header("x-request-id", "req-42"),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.is_authorized_for(test_id(), "read").await;

    match result {
        Err(AuthzError::Service {
            status,
            body,
            headers,
        }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "ability store unavailable");
            assert!(headers
                .iter()
                .any(|(name, value)| name == "x-request-id" && value == "req-42"));
        }
        other => panic!("expected Service error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_abilities_denied_without_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let request = AuthorizationRequest::new(test_id(), Vec::<String>::new());
    let granted = client.check(&request).await.expect("check failed");

    assert!(!granted, "empty ability list must be denied locally");
}

#[tokio::test]
async fn test_nil_identity_denied_without_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let granted = client
        .is_authorized_for(Uuid::nil(), "read")
        .await
        .expect("check failed");

    assert!(!granted, "nil identity must be denied locally");
}

#[tokio::test]
async fn test_trailing_slash_bases_hit_same_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CHECK_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&mock_server)
        .await;

    for base in [
        format!("{}/v1", mock_server.uri()),
        format!("{}/v1/", mock_server.uri()),
    ] {
        let config = AuthzConfig::default().with_base_url(base);
        let client = AuthzClient::new(config).expect("failed to create client");
        let granted = client
            .is_authorized_for(test_id(), "read")
            .await
            .expect("check failed");
        assert!(granted);
    }
}

#[tokio::test]
async fn test_transport_failure_propagates() {
    // Nothing listens on the discard port; the connect fails.
    let config = AuthzConfig::default()
        .with_base_url("http://127.0.0.1:9/v1")
        .with_timeout_secs(2);
    let client = AuthzClient::new(config).expect("failed to create client");

    let result = client.is_authorized_for(test_id(), "read").await;

    assert!(
        matches!(result, Err(AuthzError::Transport { .. })),
        "transport failures must not resolve to denied"
    );
}

#[tokio::test]
async fn test_user_agent_header() {
    let mock_server = MockServer::start().await;

    let user_agent = format!("gatecheck-client/{}", env!("CARGO_PKG_VERSION"));

    Mock::given(method("POST"))
        .and(path(CHECK_PATH))
        .and(header("user-agent", user_agent.as_str()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let _ = client.is_authorized_for(test_id(), "read").await;
}
