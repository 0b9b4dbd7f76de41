//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the redmineapi binary.

use clap::{Parser, Subcommand, ValueEnum};

use crate::ProjectStatus;

/// Redmine API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "redmineapi", about = "Redmine API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Act as another user (requires an administrator API key).
    #[arg(long, global = true, env = "REDMINE_SWITCH_USER")]
    pub switch_user: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get a single entity by ID.
    Get {
        /// The type of entity to get.
        entity: Entity,

        /// Numeric ID.
        id: u64,
    },

    /// List entities with optional filtering and pagination.
    List {
        /// The type of entity to list.
        entity: Entity,

        /// Maximum number of items per page (page size with --all).
        #[arg(long)]
        limit: Option<u32>,

        /// Number of items to skip.
        #[arg(long, conflicts_with = "all")]
        offset: Option<u32>,

        /// Only entities with this status (all, active, closed, archived).
        #[arg(long, conflicts_with = "status_not")]
        status: Option<ProjectStatus>,

        /// Exclude entities with this status.
        #[arg(long)]
        status_not: Option<ProjectStatus>,

        /// Fetch every page.
        #[arg(long)]
        all: bool,
    },

    /// Create an entity.
    Create {
        /// The type of entity to create.
        entity: Entity,

        /// Display name.
        #[arg(long)]
        name: String,

        /// Unique identifier (slug).
        #[arg(long)]
        identifier: String,

        /// Description.
        #[arg(long)]
        description: Option<String>,

        /// Parent entity ID.
        #[arg(long)]
        parent: Option<u64>,
    },

    /// Update an entity.
    Update {
        /// The type of entity to update.
        entity: Entity,

        /// The ID of the entity to update.
        id: u64,

        /// New name for the entity.
        #[arg(long)]
        name: Option<String>,

        /// New description for the entity.
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an entity.
    Delete {
        /// The type of entity to delete.
        entity: Entity,

        /// The ID of the entity to delete.
        id: u64,
    },
}

/// Entity types that can be operated on.
#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum Entity {
    /// A Redmine project.
    #[value(alias = "projects")]
    Project,
}
