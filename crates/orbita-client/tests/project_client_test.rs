//! Contract tests for ProjectClient against the Orbita API surface.

use orbita_client::{ClientError, Credentials, SiteClient, SiteConfig};
use orbita_core::{ProjectDraft, TechList, ValidationError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> SiteClient {
    let config = SiteConfig {
        base_url: server.uri().parse().unwrap(),
        timeout_secs: 5,
    };
    SiteClient::new(config).unwrap()
}

fn shop_draft() -> ProjectDraft {
    ProjectDraft {
        title: "E-Commerce Platform".to_string(),
        description: "Storefront with custom checkout".to_string(),
        tech: TechList::parse("React, Rust, Postgres").unwrap(),
        image: "https://cdn.example.com/shop.jpg".to_string(),
        link: None,
    }
}

fn stored_project_json(id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "description": "Storefront with custom checkout",
        "tech": ["React", "Rust", "Postgres"],
        "image": "https://cdn.example.com/shop.jpg",
        "created_at": "2026-03-01T12:00:00Z"
    })
}

// ── GET /api/projects ────────────────────────────────────────────────

#[tokio::test]
async fn public_list_parses_portfolio_entries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            stored_project_json("550e8400-e29b-41d4-a716-446655440000", "E-Commerce Platform")
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let projects = client.projects().list().await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].title, "E-Commerce Platform");
    assert_eq!(projects[0].tech.entries(), ["React", "Rust", "Postgres"]);
}

// ── POST /api/admin/projects ─────────────────────────────────────────

#[tokio::test]
async fn create_sends_the_draft_and_parses_the_created_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/projects"))
        .and(header("Authorization", "Basic YWRtaW46c2VjcmV0"))
        .and(body_json(serde_json::json!({
            "title": "E-Commerce Platform",
            "description": "Storefront with custom checkout",
            "tech": ["React", "Rust", "Postgres"],
            "image": "https://cdn.example.com/shop.jpg"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(stored_project_json(
            "550e8400-e29b-41d4-a716-446655440000",
            "E-Commerce Platform",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let auth = Credentials::new("admin", "secret");

    let project = client.projects().create(&shop_draft(), &auth).await.unwrap();
    assert_eq!(project.title, "E-Commerce Platform");
}

#[tokio::test]
async fn create_with_empty_tech_makes_no_network_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let auth = Credentials::new("admin", "secret");

    // serde admits an empty array on the wire; the client boundary must
    // reject it before dispatch.
    let draft: ProjectDraft = serde_json::from_value(serde_json::json!({
        "title": "X",
        "description": "Y",
        "tech": [],
        "image": "https://example.com/x.jpg"
    }))
    .unwrap();

    let err = client.projects().create(&draft, &auth).await.unwrap_err();
    match err {
        ClientError::Validation(ValidationError::EmptyTechList) => {}
        other => panic!("expected EmptyTechList, got: {other:?}"),
    }
}

// ── PUT /api/admin/projects/{id} ─────────────────────────────────────

#[tokio::test]
async fn update_returns_the_replaced_record() {
    let server = MockServer::start().await;
    let id = "550e8400-e29b-41d4-a716-446655440000";

    Mock::given(method("PUT"))
        .and(path(format!("/api/admin/projects/{id}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(stored_project_json(id, "Marketplace")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let auth = Credentials::new("admin", "secret");

    let project = client
        .projects()
        .update(id.parse().unwrap(), &shop_draft(), &auth)
        .await
        .unwrap();
    assert_eq!(project.title, "Marketplace");
}

// ── DELETE /api/admin/projects/{id} ──────────────────────────────────

#[tokio::test]
async fn delete_removes_the_entry_from_the_subsequent_list() {
    let server = MockServer::start().await;
    let id = "550e8400-e29b-41d4-a716-446655440000";

    // The listing before the delete contains the entry once…
    Mock::given(method("GET"))
        .and(path("/api/admin/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            stored_project_json(id, "E-Commerce Platform")
        ])))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(format!("/api/admin/projects/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "Project deleted"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // …and the re-fetch after it comes back empty.
    Mock::given(method("GET"))
        .and(path("/api/admin/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let auth = Credentials::new("admin", "secret");

    let before = client.projects().list_admin(&auth).await.unwrap();
    assert_eq!(before.len(), 1);

    let ack = client
        .projects()
        .delete(id.parse().unwrap(), &auth)
        .await
        .unwrap();
    assert!(ack.success);

    let after = client.projects().list_admin(&auth).await.unwrap();
    assert!(after.is_empty());
}

#[tokio::test]
async fn admin_list_unauthorized_surfaces_as_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/projects"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {"code": "UNAUTHORIZED", "message": "invalid credentials"}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let auth = Credentials::new("admin", "stale");

    let err = client.projects().list_admin(&auth).await.unwrap_err();
    assert!(err.is_auth(), "expected Auth, got: {err:?}");
}
