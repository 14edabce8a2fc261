//! HTTP auth client against a mock backend.

use assert_matches::assert_matches;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use careauth::{AuthCallError, AuthService, Config, HttpAuthService, SignUpProfile};

async fn service_for(server: &MockServer) -> HttpAuthService {
    let config = Config::builder()
        .server_url(server.uri())
        .build()
        .expect("mock server config");
    HttpAuthService::new(config)
}

fn profile() -> SignUpProfile {
    SignUpProfile {
        full_name: "Alex Chen".to_string(),
        role: "patient".to_string(),
        region: "AU".to_string(),
    }
}

#[tokio::test]
async fn test_sign_in_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/sign-in"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let service = service_for(&server).await;
    let result = service.sign_in("user@x.com", "secret1").await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_error_envelope_in_ok_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/sign-in"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": { "message": "Invalid login credentials" }
        })))
        .mount(&server)
        .await;

    let service = service_for(&server).await;
    let result = service.sign_in("user@x.com", "wrong").await;
    assert_matches!(result, Err(AuthCallError::Service(error)) => {
        assert_eq!(error.message, "Invalid login credentials");
        assert!(error.code.is_none());
    });
}

#[tokio::test]
async fn test_error_status_recovers_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/sign-in"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": { "message": "Email not confirmed", "code": "email_not_confirmed" }
        })))
        .mount(&server)
        .await;

    let service = service_for(&server).await;
    let result = service.sign_in("user@x.com", "secret1").await;
    assert_matches!(result, Err(AuthCallError::Service(error)) => {
        assert_eq!(error.message, "Email not confirmed");
        assert_eq!(error.code.as_deref(), Some("email_not_confirmed"));
    });
}

#[tokio::test]
async fn test_error_status_without_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/sign-up"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let service = service_for(&server).await;
    let result = service.sign_up("user@x.com", "abcdefgh", &profile()).await;
    assert_matches!(result, Err(AuthCallError::Service(error)) => {
        assert_eq!(error.message, "Internal Server Error");
    });
}

#[tokio::test]
async fn test_sign_up_posts_profile() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/sign-up"))
        .and(body_json(serde_json::json!({
            "email": "alex@example.com",
            "password": "abcdefgh",
            "profile": {
                "full_name": "Alex Chen",
                "role": "patient",
                "region": "AU"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server).await;
    let result = service
        .sign_up("alex@example.com", "abcdefgh", &profile())
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_unparseable_response_is_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/sign-in"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let service = service_for(&server).await;
    let result = service.sign_in("user@x.com", "secret1").await;
    assert_matches!(result, Err(AuthCallError::Transport { .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_failure() {
    let config = Config::builder()
        .server_url("http://127.0.0.1:1")
        .build()
        .expect("config");
    let service = HttpAuthService::new(config);

    let result = service.sign_in("user@x.com", "secret1").await;
    assert_matches!(result, Err(AuthCallError::Transport { .. }));
}
