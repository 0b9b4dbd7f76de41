//! Redmine API CLI binary.
//!
//! A command-line interface for managing Redmine projects.

use clap::Parser;
use redmineapi::cli::{Cli, Command, Entity};
use redmineapi::output::{to_json, PrettyPrint};
use redmineapi::{
    Create, Delete, Get, List, Page, Pagination, Project, ProjectsFilter, RedmineClient,
    TraversingClient, Update,
};
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut client = match RedmineClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set REDMINE_URL and REDMINE_API_KEY environment variables");
            return ExitCode::FAILURE;
        }
    };
    if let Some(login) = cli.switch_user.as_deref() {
        client.set_impersonated_user(login);
    }

    match run(client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: RedmineClient, cli: Cli) -> redmineapi::Result<()> {
    match cli.command {
        Command::Get { entity, id } => handle_get(&client, entity, id, cli.json).await,
        Command::List {
            entity,
            limit,
            offset,
            status,
            status_not,
            all,
        } => {
            let mut filter = ProjectsFilter::new();
            if let Some(status) = status {
                filter.status(status);
            }
            if let Some(status) = status_not {
                filter.status_not(status);
            }
            let pagination = Pagination { limit, offset };
            handle_list(client, entity, &filter, pagination, all, cli.json).await
        }
        Command::Create {
            entity,
            name,
            identifier,
            description,
            parent,
        } => {
            let Entity::Project = entity;
            let mut project = Project::new(name, identifier);
            if let Some(description) = description {
                project = project.with_description(description);
            }
            if let Some(parent) = parent {
                project = project.with_parent(parent);
            }
            let created = Project::create(&client, &project).await?;
            output_single(&created, cli.json)
        }
        Command::Update {
            entity,
            id,
            name,
            description,
        } => handle_update(&client, entity, id, name, description).await,
        Command::Delete { entity, id } => {
            let Entity::Project = entity;
            Project::delete(&client, id).await?;
            eprintln!("Deleted project #{id}");
            Ok(())
        }
    }
}

async fn handle_get(
    client: &RedmineClient,
    entity: Entity,
    id: u64,
    json: bool,
) -> redmineapi::Result<()> {
    match entity {
        Entity::Project => {
            let project = Project::get(client, id).await?;
            output_single(&project, json)
        }
    }
}

async fn handle_list(
    client: RedmineClient,
    entity: Entity,
    filter: &ProjectsFilter,
    pagination: Pagination,
    all: bool,
    json: bool,
) -> redmineapi::Result<()> {
    let Entity::Project = entity;

    if all {
        let client = match pagination.limit {
            Some(size) => TraversingClient::with_page_size(client, size)?,
            None => TraversingClient::from_client(client)?,
        };
        let projects = Project::list_all(&client, filter).await?;
        output_items::<_, ProjectRow>(&projects, json)?;
        if !json {
            println!("\n{} projects", projects.len());
        }
    } else {
        let page = Project::list_page(&client, filter, pagination).await?;
        output_page::<_, ProjectRow>(&page, json)?;
    }
    Ok(())
}

async fn handle_update(
    client: &RedmineClient,
    entity: Entity,
    id: u64,
    name: Option<String>,
    description: Option<String>,
) -> redmineapi::Result<()> {
    match entity {
        Entity::Project => {
            // Redmine replaces the record, so start from its current state.
            let mut project = Project::get(client, id).await?;
            if let Some(name) = name {
                project.name = name;
            }
            if let Some(description) = description {
                project.description = description;
            }
            Project::update(client, &project).await?;
            eprintln!("Updated project #{id}");
        }
    }
    Ok(())
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> redmineapi::Result<()> {
    if json {
        println!("{}", to_json(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_items<T, R>(items: &[T], json: bool) -> redmineapi::Result<()>
where
    T: Serialize,
    R: Tabled + for<'a> From<&'a T>,
{
    if json {
        println!("{}", to_json(items)?);
    } else {
        let rows: Vec<R> = items.iter().map(R::from).collect();
        println!("{}", Table::new(rows));
    }
    Ok(())
}

fn output_page<T, R>(page: &Page<T>, json: bool) -> redmineapi::Result<()>
where
    T: Serialize,
    R: Tabled + for<'a> From<&'a T>,
{
    output_items::<T, R>(&page.items, json)?;
    if !json {
        let first = if page.is_empty() { 0 } else { u64::from(page.offset) + 1 };
        let last = u64::from(page.offset) + page.len() as u64;
        if page.has_more() {
            println!("\nItems {first}-{last} of {} (more available)", page.total_count);
        } else {
            println!("\nItems {first}-{last} of {}", page.total_count);
        }
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct ProjectRow {
    id: u64,
    identifier: String,
    name: String,
    parent: String,
    status: String,
}

impl From<&Project> for ProjectRow {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id,
            identifier: p.identifier.clone(),
            name: p.name.clone(),
            parent: p
                .parent
                .as_ref()
                .map(|parent| parent.name.clone())
                .unwrap_or_default(),
            status: p
                .project_status()
                .map(|s| s.to_string())
                .unwrap_or_default(),
        }
    }
}
