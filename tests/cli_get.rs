//! Execution tests for fetching a single project.
//!
//! Uses wiremock to mock the Redmine API and test actual execution flow.

use redmineapi::{Get, Project, RedmineClient, RedmineError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_project_decodes_envelope() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({
        "project": {
            "id": 12,
            "name": "Test Project",
            "identifier": "test-project",
            "description": "A project",
            "parent": { "id": 1, "name": "Root" },
            "created_on": "2024-03-01T10:00:00Z",
            "updated_on": "2024-03-02T10:00:00Z"
        }
    });

    Mock::given(method("GET"))
        .and(path("/projects/12.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RedmineClient::new(&mock_server.uri(), "test-key").unwrap();
    let project = Project::get(&client, 12).await.unwrap();

    assert_eq!(project.id, 12);
    assert_eq!(project.name, "Test Project");
    assert_eq!(project.identifier, "test-project");
    assert_eq!(project.parent_id(), Some(1));
    assert_eq!(project.created_on, "2024-03-01T10:00:00Z");
}

#[tokio::test]
async fn test_get_sends_api_key_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/1.json"))
        .and(header("X-Redmine-API-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "project": { "id": 1, "name": "A", "identifier": "a" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RedmineClient::new(&mock_server.uri(), "test-key").unwrap();
    Project::get(&client, 1).await.unwrap();
}

#[tokio::test]
async fn test_get_sends_switch_user_header_when_impersonating() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/1.json"))
        .and(header("X-Redmine-API-Key", "admin-key"))
        .and(header("X-Redmine-Switch-User", "jsmith"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "project": { "id": 1, "name": "A", "identifier": "a" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = RedmineClient::new(&mock_server.uri(), "admin-key").unwrap();
    client.set_impersonated_user("jsmith");
    Project::get(&client, 1).await.unwrap();
}

#[tokio::test]
async fn test_get_without_impersonation_omits_switch_user_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "project": { "id": 1, "name": "A", "identifier": "a" }
        })))
        .mount(&mock_server)
        .await;

    let client = RedmineClient::new(&mock_server.uri(), "key").unwrap();
    Project::get(&client, 1).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("x-redmine-switch-user"));
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_get_error_envelope_is_joined() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/5.json"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "errors": ["You are not authorized", "Project is private"]
        })))
        .mount(&mock_server)
        .await;

    let client = RedmineClient::new(&mock_server.uri(), "key").unwrap();
    let err = Project::get(&client, 5).await.unwrap_err();

    match err {
        RedmineError::Remote {
            message,
            status_code,
        } => {
            assert_eq!(message, "You are not authorized\nProject is private");
            assert_eq!(status_code, 403);
        }
        other => panic!("Expected Remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_undecodable_error_body_is_decode_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/5.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = RedmineClient::new(&mock_server.uri(), "key").unwrap();
    let err = Project::get(&client, 5).await.unwrap_err();

    assert!(matches!(err, RedmineError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_get_non_json_success_body_is_decode_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/5.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&mock_server)
        .await;

    let client = RedmineClient::new(&mock_server.uri(), "key").unwrap();
    let err = Project::get(&client, 5).await.unwrap_err();

    assert!(matches!(err, RedmineError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_get_transport_failure_is_surfaced() {
    // Reserve a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = RedmineClient::new(&format!("http://{addr}"), "key").unwrap();
    let err = Project::get(&client, 1).await.unwrap_err();

    assert!(matches!(err, RedmineError::Transport(_)), "got {err:?}");
}
