//! Contract tests for QuoteClient against the Orbita API surface.
//!
//! These tests use wiremock to simulate the backend. Request paths,
//! bodies, and headers are asserted exactly — including that validation
//! failures never reach the network and that the Basic header is derived
//! from the stored credential pair.

use orbita_client::{ClientError, Credentials, SiteClient, SiteConfig};
use orbita_core::{QuoteRequest, QuoteStatus, ValidationError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> SiteClient {
    let config = SiteConfig {
        base_url: server.uri().parse().unwrap(),
        timeout_secs: 5,
    };
    SiteClient::new(config).unwrap()
}

fn ivan_request() -> QuoteRequest {
    QuoteRequest {
        name: "Ivan".to_string(),
        email: "ivan@example.com".to_string(),
        phone: None,
        message: "Need a site".to_string(),
    }
}

fn stored_quote_json(status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "550e8400-e29b-41d4-a716-446655440000",
        "name": "Ivan",
        "email": "ivan@example.com",
        "message": "Need a site",
        "status": status,
        "country": "Portugal",
        "ip_address": "203.0.113.9",
        "created_at": "2026-03-01T12:00:00Z"
    })
}

// ── POST /api/quote ──────────────────────────────────────────────────

#[tokio::test]
async fn submit_posts_exactly_once_with_the_entered_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/quote"))
        .and(body_json(serde_json::json!({
            "name": "Ivan",
            "email": "ivan@example.com",
            "message": "Need a site"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "Quote submitted successfully",
            "quote_id": "550e8400-e29b-41d4-a716-446655440000"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let response = client.quotes().submit(&ivan_request()).await.unwrap();
    assert!(response.success);
    assert!(response.quote_id.is_some());
}

#[tokio::test]
async fn submit_with_missing_field_makes_no_network_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/quote"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = QuoteRequest {
        name: String::new(),
        ..ivan_request()
    };

    let err = client.quotes().submit(&request).await.unwrap_err();
    match err {
        ClientError::Validation(ValidationError::MissingField { field }) => {
            assert_eq!(field, "name");
        }
        other => panic!("expected Validation, got: {other:?}"),
    }
}

#[tokio::test]
async fn submit_failure_leaves_the_request_intact_for_retry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/quote"))
        .respond_with(ResponseTemplate::new(500).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = ivan_request();

    let err = client.quotes().submit(&request).await.unwrap_err();
    match err {
        ClientError::Api { status, .. } => assert_eq!(status, 500),
        other => panic!("expected Api, got: {other:?}"),
    }
    // The caller still owns the entered values and can resubmit as-is.
    assert_eq!(request.name, "Ivan");
    assert_eq!(request.message, "Need a site");
}

#[tokio::test]
async fn submit_transport_failure_is_distinct_from_api_error() {
    // Nothing listens here — the connection itself fails.
    let config = SiteConfig {
        base_url: "http://127.0.0.1:9".parse().unwrap(),
        timeout_secs: 1,
    };
    let client = SiteClient::new(config).unwrap();

    let err = client.quotes().submit(&ivan_request()).await.unwrap_err();
    match err {
        ClientError::Http { .. } => {}
        other => panic!("expected Http, got: {other:?}"),
    }
}

// ── GET /api/admin/quotes ────────────────────────────────────────────

#[tokio::test]
async fn list_admin_sends_basic_header_derived_from_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/quotes"))
        // base64("admin:secret")
        .and(header("Authorization", "Basic YWRtaW46c2VjcmV0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([stored_quote_json("new")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let auth = Credentials::new("admin", "secret");

    let quotes = client.quotes().list_admin(&auth).await.unwrap();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].name, "Ivan");
    assert_eq!(quotes[0].status, QuoteStatus::New);
}

#[tokio::test]
async fn list_admin_unauthorized_surfaces_as_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/quotes"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {"code": "UNAUTHORIZED", "message": "invalid credentials"}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let auth = Credentials::new("admin", "stale-password");

    let err = client.quotes().list_admin(&auth).await.unwrap_err();
    assert!(err.is_auth(), "expected Auth, got: {err:?}");
    match err {
        ClientError::Auth { message, .. } => assert_eq!(message, "invalid credentials"),
        other => panic!("expected Auth, got: {other:?}"),
    }
}

// ── PATCH /api/admin/quotes/{id}/status ──────────────────────────────

#[tokio::test]
async fn update_status_sends_wire_form_of_the_status() {
    let server = MockServer::start().await;
    let id = "550e8400-e29b-41d4-a716-446655440000";

    Mock::given(method("PATCH"))
        .and(path(format!("/api/admin/quotes/{id}/status")))
        .and(body_json(serde_json::json!({"status": "in_progress"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "Status updated"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let auth = Credentials::new("admin", "secret");

    let ack = client
        .quotes()
        .update_status(id.parse().unwrap(), QuoteStatus::InProgress, &auth)
        .await
        .unwrap();
    assert!(ack.success);
}

#[tokio::test]
async fn update_status_unknown_quote_is_api_error_not_auth() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": {"code": "NOT_FOUND", "message": "not found: quote"}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let auth = Credentials::new("admin", "secret");

    let err = client
        .quotes()
        .update_status(uuid::Uuid::new_v4(), QuoteStatus::Completed, &auth)
        .await
        .unwrap_err();
    match err {
        ClientError::Api { status, .. } => assert_eq!(status, 404),
        other => panic!("expected Api, got: {other:?}"),
    }
}

// ── DELETE /api/admin/quotes/{id} ────────────────────────────────────

#[tokio::test]
async fn delete_hits_the_lead_path() {
    let server = MockServer::start().await;
    let id = "550e8400-e29b-41d4-a716-446655440000";

    Mock::given(method("DELETE"))
        .and(path(format!("/api/admin/quotes/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "Quote deleted"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let auth = Credentials::new("admin", "secret");

    let ack = client
        .quotes()
        .delete(id.parse().unwrap(), &auth)
        .await
        .unwrap();
    assert!(ack.success);
}
