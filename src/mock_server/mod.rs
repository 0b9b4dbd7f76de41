//! Mock Redmine API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Redmine
//! project endpoints for integration and end-to-end testing. Unlike wiremock
//! which mocks at the HTTP level per-test, this server maintains state across
//! requests, enabling realistic workflow testing.
//!
//! # Example
//!
//! ```ignore
//! use redmineapi::mock_server::MockServer;
//! use redmineapi::{Get, Project, RedmineClient};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = RedmineClient::new(server.url(), "test-key").unwrap();
//!
//!     // Server comes with default fixtures
//!     let project = Project::get(&client, 1).await.unwrap();
//!     assert_eq!(project.name, "Platform");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::MockState;
