//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::{CustomField, IdName, Project};

use super::state::MOCK_TIMESTAMP;

/// Collection of fixture factories for test data.
pub struct Fixtures;

/// The data set the default mock server starts with.
pub struct DefaultScenario {
    pub projects: Vec<Project>,
}

impl Fixtures {
    /// Create an active project with required fields only.
    pub fn minimal_project(id: u64, identifier: &str, name: &str) -> Project {
        Project {
            id,
            name: name.to_string(),
            identifier: identifier.to_string(),
            status: Some(1),
            is_public: Some(true),
            created_on: MOCK_TIMESTAMP.to_string(),
            updated_on: MOCK_TIMESTAMP.to_string(),
            ..Default::default()
        }
    }

    /// Create a project nested under `parent_id`.
    pub fn subproject(id: u64, identifier: &str, name: &str, parent_id: u64) -> Project {
        let mut project = Self::minimal_project(id, identifier, name);
        project.parent = Some(IdName::new(parent_id, ""));
        project
    }

    /// `count` active projects with consecutive IDs starting at 1.
    pub fn many_projects(count: u64) -> Vec<Project> {
        (1..=count)
            .map(|id| Self::minimal_project(id, &format!("project-{id}"), &format!("Project {id}")))
            .collect()
    }

    /// A small hierarchy covering every project status.
    pub fn default_scenario() -> DefaultScenario {
        let mut platform = Self::minimal_project(1, "platform", "Platform");
        platform.description = "Shared platform services".to_string();
        platform.custom_fields = vec![CustomField {
            id: 1,
            name: "Team".to_string(),
            multiple: false,
            value: serde_json::json!("core"),
        }];

        let mut backend = Self::subproject(2, "backend", "Backend", 1);
        if let Some(parent) = backend.parent.as_mut() {
            parent.name = "Platform".to_string();
        }

        let mut legacy = Self::minimal_project(3, "legacy", "Legacy");
        legacy.status = Some(5);

        let mut archive = Self::minimal_project(4, "archive", "Archive");
        archive.status = Some(9);
        archive.is_public = Some(false);

        DefaultScenario {
            projects: vec![platform, backend, legacy, archive],
        }
    }
}
