//! Project endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;
use crate::models::ProjectRequest;
use crate::{Project, API_KEY_HEADER};

/// Page size applied when the request sends no `limit`.
const DEFAULT_LIMIT: u32 = 25;

/// Largest page size the server will return.
const MAX_LIMIT: u32 = 100;

/// Query parameters for listing projects.
#[derive(Debug, Default, Deserialize)]
pub struct ListProjectsQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub status: Option<String>,
}

/// Response for listing projects.
#[derive(Debug, Serialize)]
pub struct ListProjectsResponse {
    pub projects: Vec<Project>,
    pub total_count: u64,
    pub limit: u32,
    pub offset: u32,
}

/// Single-project response envelope.
#[derive(Debug, Serialize)]
pub struct ProjectEnvelope {
    pub project: Project,
}

fn errors(status: StatusCode, messages: Vec<String>) -> Response {
    (status, Json(serde_json::json!({ "errors": messages }))).into_response()
}

/// Reject the request unless it carries the required API key.
fn authorize(state: &MockState, headers: &HeaderMap) -> Result<(), Response> {
    let Some(required) = state.required_api_key.as_deref() else {
        return Ok(());
    };
    let sent = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
    if sent == Some(required) {
        Ok(())
    } else {
        Err(errors(
            StatusCode::UNAUTHORIZED,
            vec!["Invalid API key".to_string()],
        ))
    }
}

/// Parse a `{id}.json` path segment.
fn parse_id(segment: &str) -> Option<u64> {
    segment.strip_suffix(".json")?.parse().ok()
}

/// GET /projects/{id}.json
pub async fn get_project(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(segment): Path<String>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    match parse_id(&segment).and_then(|id| state.get_project(id)) {
        Some(project) => (
            StatusCode::OK,
            Json(ProjectEnvelope {
                project: project.clone(),
            }),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// GET /projects.json
pub async fn list_projects(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Query(query): Query<ListProjectsQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let offset = query.offset.unwrap_or(0);

    let all_projects = state.list_projects(query.status.as_deref());
    let total_count = all_projects.len() as u64;

    let projects: Vec<Project> = all_projects
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .cloned()
        .collect();

    (
        StatusCode::OK,
        Json(ListProjectsResponse {
            projects,
            total_count,
            limit,
            offset,
        }),
    )
        .into_response()
}

/// POST /projects.json
pub async fn create_project(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Json(body): Json<ProjectRequest>,
) -> Response {
    let mut state = state.write().await;
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    match state.create_project(body.project.into()) {
        Ok(project) => (StatusCode::CREATED, Json(ProjectEnvelope { project })).into_response(),
        Err(messages) => errors(StatusCode::UNPROCESSABLE_ENTITY, messages),
    }
}

/// PUT /projects/{id}.json
pub async fn update_project(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(segment): Path<String>,
    Json(body): Json<ProjectRequest>,
) -> Response {
    let mut state = state.write().await;
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    let Some(id) = parse_id(&segment) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match state.update_project(id, body.project.into()) {
        Some(Ok(())) => StatusCode::OK.into_response(),
        Some(Err(messages)) => errors(StatusCode::UNPROCESSABLE_ENTITY, messages),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// DELETE /projects/{id}.json
pub async fn delete_project(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(segment): Path<String>,
) -> Response {
    let mut state = state.write().await;
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    match parse_id(&segment) {
        Some(id) if state.delete_project(id) => StatusCode::OK.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}
