//! Unit tests for the github_hooks_client crate.

use super::*; // Import items from lib.rs
use http::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// --- Test Constants ---
const TEST_TOKEN: &str = "ghp_test_token";

fn test_client(mock_server: &MockServer) -> GitHubHooksClient {
    GitHubHooksClient::with_base_uri(TEST_TOKEN, &mock_server.uri())
        .expect("client should build against the mock server")
}

fn hook_body(id: u64, owner: &str, repo: &str) -> serde_json::Value {
    json!({
        "id": id,
        "url": format!("https://api.github.com/repos/{owner}/{repo}/hooks/{id}"),
        "active": true,
        "events": ["push"],
        "config": {
            "url": "https://example.com/hook",
            "content_type": "json",
            "insecure_ssl": "0"
        }
    })
}

#[tokio::test]
async fn test_create_hook_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/repos/test-owner/test-repo/hooks"))
        .and(body_partial_json(json!({
            "config": {"url": "https://example.com/hook", "content_type": "json"}
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(hook_body(242575190, "test-owner", "test-repo")),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let request = HookRequest {
        config: HookConfig {
            url: Some("https://example.com/hook".to_string()),
            content_type: Some("json".to_string()),
            ..Default::default()
        },
        events: vec!["push".to_string()],
        active: Some(true),
    };

    let hook = client
        .create_hook("test-owner", "test-repo", &request)
        .await
        .expect("create should succeed");

    assert_eq!(hook.id, 242575190);
    assert_eq!(
        hook.url,
        "https://api.github.com/repos/test-owner/test-repo/hooks/242575190"
    );
}

#[tokio::test]
async fn test_create_hook_validation_failure_surfaces_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/repos/test-owner/test-repo/hooks"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Validation Failed: Hook already exists on this repository",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let request = HookRequest::default();

    let error = client
        .create_hook("test-owner", "test-repo", &request)
        .await
        .expect_err("create should fail");

    match error {
        Error::Api { status, message } => {
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert!(message.contains("Hook already exists on this repository"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_hook_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/hooks/242575190"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(hook_body(242575190, "test-owner", "test-repo")),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let hook = client
        .get_hook("test-owner", "test-repo", 242575190)
        .await
        .expect("get should succeed");

    assert_eq!(hook.id, 242575190);
    assert_eq!(hook.config.content_type.as_deref(), Some("json"));
}

#[tokio::test]
async fn test_get_hook_not_found_surfaces_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/hooks/242575190"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let error = client
        .get_hook("test-owner", "test-repo", 242575190)
        .await
        .expect_err("get should fail");

    assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn test_edit_hook_success() {
    let mock_server = MockServer::start().await;

    let mut updated = hook_body(242575190, "test-owner", "test-repo");
    updated["config"]["content_type"] = json!("form");

    Mock::given(method("PATCH"))
        .and(path("/repos/test-owner/test-repo/hooks/242575190"))
        .and(body_partial_json(json!({
            "config": {"content_type": "form"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let request = HookRequest {
        config: HookConfig {
            url: Some("https://example.com/hook".to_string()),
            content_type: Some("form".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    let hook = client
        .edit_hook("test-owner", "test-repo", 242575190, &request)
        .await
        .expect("edit should succeed");

    assert_eq!(hook.config.content_type.as_deref(), Some("form"));
}

#[tokio::test]
async fn test_delete_hook_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/repos/test-owner/test-repo/hooks/242575190"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client.delete_hook("test-owner", "test-repo", 242575190).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delete_hook_failure_surfaces_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/repos/test-owner/test-repo/hooks/242575190"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let error = client
        .delete_hook("test-owner", "test-repo", 242575190)
        .await
        .expect_err("delete should fail");

    assert_eq!(error.status(), Some(StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn test_transport_error_has_no_status() {
    // Point the client at a closed port so the request never reaches GitHub.
    let client = GitHubHooksClient::with_base_uri(TEST_TOKEN, "http://127.0.0.1:1")
        .expect("client should build");

    let error = client
        .get_hook("test-owner", "test-repo", 242575190)
        .await
        .expect_err("request should fail");

    assert_eq!(error.status(), None);
}
