//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Redmine API server.

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::Project;

/// Timestamp stamped on records created or updated through the mock server.
pub const MOCK_TIMESTAMP: &str = "2024-01-01T00:00:00Z";

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug)]
pub struct MockState {
    /// Projects indexed by ID; list order follows ID order.
    pub projects: BTreeMap<u64, Project>,

    /// ID assigned to the next created project.
    pub next_id: u64,

    /// Optional API key. If set, requests must send it in `X-Redmine-API-Key`.
    pub required_api_key: Option<String>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            projects: BTreeMap::new(),
            next_id: 1,
            required_api_key: None,
        }
    }
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a project to the state, keeping its ID.
    pub fn with_project(mut self, project: Project) -> Self {
        self.insert_project(project);
        self
    }

    /// Set the required API key.
    pub fn with_required_api_key(mut self, key: &str) -> Self {
        self.required_api_key = Some(key.to_string());
        self
    }

    /// Insert or replace a project, keeping its ID.
    pub fn insert_project(&mut self, project: Project) {
        self.next_id = self.next_id.max(project.id + 1);
        self.projects.insert(project.id, project);
    }

    /// Get a project by ID.
    pub fn get_project(&self, id: u64) -> Option<&Project> {
        self.projects.get(&id)
    }

    /// List projects, optionally filtered by a `status` query value.
    ///
    /// `"X"` matches status X, `"!X"` excludes it, and an empty value
    /// matches everything.
    pub fn list_projects(&self, status: Option<&str>) -> Vec<&Project> {
        self.projects
            .values()
            .filter(|p| match status {
                None | Some("") => true,
                Some(s) => match s.strip_prefix('!') {
                    Some(excluded) => !status_matches(p, excluded),
                    None => status_matches(p, s),
                },
            })
            .collect()
    }

    /// Validate and store a new project, returning the stored copy.
    pub fn create_project(&mut self, mut project: Project) -> Result<Project, Vec<String>> {
        let mut errors = validate(&project);
        if self
            .projects
            .values()
            .any(|p| p.identifier == project.identifier)
        {
            errors.push("Identifier has already been taken".to_string());
        }
        if let Err(e) = self.resolve_parent(&mut project) {
            errors.push(e);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        project.id = self.next_id;
        project.status = Some(1);
        project.is_public.get_or_insert(true);
        project.created_on = MOCK_TIMESTAMP.to_string();
        project.updated_on = MOCK_TIMESTAMP.to_string();

        self.insert_project(project.clone());
        Ok(project)
    }

    /// Apply an update to an existing project.
    ///
    /// Returns `None` if the project does not exist.
    pub fn update_project(
        &mut self,
        id: u64,
        mut changes: Project,
    ) -> Option<Result<(), Vec<String>>> {
        let existing = self.projects.get(&id)?.clone();

        let mut errors = validate(&changes);
        if let Err(e) = self.resolve_parent(&mut changes) {
            errors.push(e);
        }
        if !errors.is_empty() {
            return Some(Err(errors));
        }

        let updated = Project {
            id,
            identifier: existing.identifier,
            status: existing.status,
            created_on: existing.created_on,
            updated_on: MOCK_TIMESTAMP.to_string(),
            is_public: changes.is_public.or(existing.is_public),
            parent: changes.parent.or(existing.parent),
            ..changes
        };
        self.projects.insert(id, updated);
        Some(Ok(()))
    }

    /// Delete a project and its subprojects. Returns false if it did not exist.
    pub fn delete_project(&mut self, id: u64) -> bool {
        if self.projects.remove(&id).is_none() {
            return false;
        }
        let children: Vec<u64> = self
            .projects
            .values()
            .filter(|p| p.parent_id() == Some(id))
            .map(|p| p.id)
            .collect();
        for child in children {
            self.delete_project(child);
        }
        true
    }

    fn resolve_parent(&self, project: &mut Project) -> Result<(), String> {
        if let Some(parent) = project.parent.as_mut() {
            match self.projects.get(&parent.id) {
                Some(p) => parent.name = p.name.clone(),
                None => return Err("Subproject of is invalid".to_string()),
            }
        }
        Ok(())
    }
}

fn status_matches(project: &Project, status: &str) -> bool {
    project.status.map(|s| s.to_string()).as_deref() == Some(status)
}

fn validate(project: &Project) -> Vec<String> {
    let mut errors = Vec::new();
    if project.name.trim().is_empty() {
        errors.push("Name cannot be blank".to_string());
    }
    if project.identifier.trim().is_empty() {
        errors.push("Identifier cannot be blank".to_string());
    }
    errors
}
