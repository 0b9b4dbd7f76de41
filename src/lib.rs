//! Redmine API client library.
//!
//! A Rust library for the Redmine REST API using a trait-based
//! architecture where each operation (Get, List, Create, Update, Delete)
//! is defined as a trait that entity types implement.
//!
//! # Quick Start
//!
//! ```no_run
//! use redmineapi::{Create, Get, List, Project, ProjectStatus, ProjectsFilter, RedmineClient, TraversingClient};
//!
//! #[tokio::main]
//! async fn main() -> redmineapi::Result<()> {
//!     // Create client from environment variables
//!     let client = RedmineClient::from_env()?;
//!
//!     // Get a project by ID
//!     let project = Project::get(&client, 1).await?;
//!     println!("Project: {}", project.name);
//!
//!     // Create a subproject
//!     let created = Project::create(
//!         &client,
//!         &Project::new("Docs", "docs").with_parent(project.id),
//!     )
//!     .await?;
//!     println!("Created project #{}", created.id);
//!
//!     // List every active project, across all pages
//!     let traversing = TraversingClient::from_client(client)?;
//!     let filter = ProjectsFilter::new().with_status(ProjectStatus::Active);
//!     let projects = Project::list_all(&traversing, &filter).await?;
//!     println!("Found {} active projects", projects.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The library is organized around five operation traits:
//!
//! - [`Get`] - Fetch a single entity by ID
//! - [`List`] - Fetch one page, or every page, of a collection
//! - [`Create`] - Add a new entity
//! - [`Update`] - Modify an existing entity
//! - [`Delete`] - Remove an entity
//!
//! [`RedmineClient`] owns the connection settings and performs single
//! authenticated requests; [`TraversingClient`] wraps it with a fixed page
//! size for [`List::list_all`].
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `REDMINE_URL` (required) - Base URL of the Redmine instance
//! - `REDMINE_API_KEY` (required) - Your Redmine API key
//! - `REDMINE_SWITCH_USER` (optional) - Login to impersonate

pub mod cli;
mod client;
mod error;
mod filter;
mod models;
pub mod output;
mod pagination;
mod traits;
mod traversing;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{RedmineClient, API_KEY_HEADER, SWITCH_USER_HEADER};
pub use error::{RedmineError, Result};
pub use filter::Filter;
pub use pagination::{page_count, Page, PageInfo, Pagination};
pub use traversing::{TraversingClient, DEFAULT_PAGE_SIZE};

// Re-export traits
pub use traits::{Create, Delete, Get, List, Update};

// Re-export models
pub use models::{CustomField, IdName, Project, ProjectStatus, ProjectsFilter};
pub use output::PrettyPrint;
