//! Execution tests for project create, update and delete.
//!
//! Uses wiremock to mock the Redmine API and test actual execution flow.

use redmineapi::{
    Create, CustomField, Delete, Project, RedmineClient, RedmineError, Update,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> RedmineClient {
    RedmineClient::new(&server.uri(), "test-key").unwrap()
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_project_posts_envelope_and_returns_created() {
    let mock_server = MockServer::start().await;

    let expected_body = serde_json::json!({
        "project": {
            "name": "Docs",
            "identifier": "docs",
            "description": "Documentation",
            "parent_id": 1,
            "custom_fields": [{ "id": 4, "value": "yes" }]
        }
    });

    let created = serde_json::json!({
        "project": {
            "id": 17,
            "name": "Docs",
            "identifier": "docs",
            "description": "Documentation",
            "parent": { "id": 1, "name": "Platform" },
            "status": 1,
            "is_public": true,
            "created_on": "2024-05-01T08:00:00Z",
            "updated_on": "2024-05-01T08:00:00Z",
            "custom_fields": [{ "id": 4, "name": "Internal", "value": "yes" }]
        }
    });

    Mock::given(method("POST"))
        .and(path("/projects.json"))
        .and(header("X-Redmine-API-Key", "test-key"))
        .and(header("content-type", "application/json"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(201).set_body_json(&created))
        .expect(1)
        .mount(&mock_server)
        .await;

    let project = Project::new("Docs", "docs")
        .with_description("Documentation")
        .with_parent(1)
        .with_custom_field(CustomField::new(4, "yes"));

    let result = Project::create(&client(&mock_server), &project)
        .await
        .unwrap();

    assert_eq!(result.id, 17);
    assert_eq!(result.name, project.name);
    assert_eq!(result.identifier, project.identifier);
    assert_eq!(result.description, project.description);
    assert_eq!(result.parent_id(), Some(1));
    assert_eq!(result.custom_field(4).and_then(|f| f.as_str()), Some("yes"));
}

#[tokio::test]
async fn test_create_validation_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/projects.json"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "errors": ["Name cannot be blank", "Identifier has already been taken"]
        })))
        .mount(&mock_server)
        .await;

    let err = Project::create(&client(&mock_server), &Project::new("", "docs"))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Name cannot be blank\nIdentifier has already been taken"
    );
    assert_eq!(err.status_code(), Some(422));
}

#[tokio::test]
async fn test_create_requires_201() {
    let mock_server = MockServer::start().await;

    // A 200 is not a successful create; its body is not an error envelope either.
    Mock::given(method("POST"))
        .and(path("/projects.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "project": { "id": 1, "name": "Docs", "identifier": "docs" }
        })))
        .mount(&mock_server)
        .await;

    let err = Project::create(&client(&mock_server), &Project::new("Docs", "docs"))
        .await
        .unwrap_err();

    assert!(matches!(err, RedmineError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_create_empty_success_body_is_decode_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/projects.json"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&mock_server)
        .await;

    let err = Project::create(&client(&mock_server), &Project::new("Docs", "docs"))
        .await
        .unwrap_err();

    assert!(matches!(err, RedmineError::Decode(_)), "got {err:?}");
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_project_puts_envelope() {
    let mock_server = MockServer::start().await;

    let expected_body = serde_json::json!({
        "project": {
            "name": "Renamed",
            "identifier": "app",
            "description": ""
        }
    });

    Mock::given(method("PUT"))
        .and(path("/projects/9.json"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut project = Project::new("Renamed", "app");
    project.id = 9;

    Project::update(&client(&mock_server), &project)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_sends_parent_as_parent_id() {
    let mock_server = MockServer::start().await;

    let expected_body = serde_json::json!({
        "project": {
            "name": "Backend",
            "identifier": "backend",
            "description": "",
            "parent_id": 1,
            "is_public": true
        }
    });

    Mock::given(method("PUT"))
        .and(path("/projects/2.json"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let project: Project = serde_json::from_value(serde_json::json!({
        "id": 2,
        "name": "Backend",
        "identifier": "backend",
        "parent": { "id": 1, "name": "Platform" },
        "status": 1,
        "is_public": true,
        "created_on": "2024-01-10T09:00:00Z",
        "updated_on": "2024-01-10T09:00:00Z"
    }))
    .unwrap();

    Project::update(&client(&mock_server), &project)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_not_found_ignores_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/projects/9.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "errors": ["Project does not exist"]
        })))
        .mount(&mock_server)
        .await;

    let mut project = Project::new("Renamed", "app");
    project.id = 9;

    let err = Project::update(&client(&mock_server), &project)
        .await
        .unwrap_err();

    assert!(matches!(err, RedmineError::NotFound));
    assert_eq!(err.to_string(), "Not Found");
}

#[tokio::test]
async fn test_update_error_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/projects/9.json"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "errors": ["Name cannot be blank"]
        })))
        .mount(&mock_server)
        .await;

    let mut project = Project::new("", "app");
    project.id = 9;

    let err = Project::update(&client(&mock_server), &project)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RedmineError::Remote { ref message, status_code: 422 } if message == "Name cannot be blank"
    ));
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_project() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/projects/3.json"))
        .and(header("X-Redmine-API-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    Project::delete(&client(&mock_server), 3).await.unwrap();
}

#[tokio::test]
async fn test_delete_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/projects/3.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let err = Project::delete(&client(&mock_server), 3)
        .await
        .unwrap_err();

    assert!(matches!(err, RedmineError::NotFound));
}

#[tokio::test]
async fn test_delete_forbidden_decodes_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/projects/3.json"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "errors": ["You are not authorized to access this page."]
        })))
        .mount(&mock_server)
        .await;

    let err = Project::delete(&client(&mock_server), 3)
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(403));
    assert_eq!(err.to_string(), "You are not authorized to access this page.");
}
