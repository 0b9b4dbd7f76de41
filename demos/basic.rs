//! Basic example demonstrating the Redmine API client.
//!
//! Run with:
//! ```
//! REDMINE_URL=https://redmine.example.com REDMINE_API_KEY=your-key cargo run --example basic
//! ```

use redmineapi::{
    Get, List, Pagination, Project, ProjectStatus, ProjectsFilter, RedmineClient,
    TraversingClient,
};

#[tokio::main]
async fn main() -> redmineapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    println!("Creating Redmine client...");
    let client = RedmineClient::from_env()?;
    println!("Connected to: {}", client.endpoint());

    // List first page of projects
    println!("\n--- Listing Projects (first page) ---");
    let page =
        Project::list_page(&client, &ProjectsFilter::default(), Pagination::new(10, 0)).await?;
    println!("Found {} projects (total: {})", page.len(), page.total_count);

    for project in &page {
        println!("  - {} ({}, #{})", project.name, project.identifier, project.id);
    }

    // Get a specific project (using the first one from the list)
    if let Some(first_project) = page.items.first() {
        println!("\n--- Getting Project Details ---");
        let project = Project::get(&client, first_project.id).await?;
        println!("Project: {}", project.name);
        println!("  Identifier: {}", project.identifier);
        if let Some(parent) = &project.parent {
            println!("  Parent: {} (#{})", parent.name, parent.id);
        }
        for field in &project.custom_fields {
            println!("  {}: {}", field.name, field.values().join(", "));
        }
    }

    // Walk every page of active projects
    println!("\n--- Listing All Active Projects ---");
    let traversing = TraversingClient::with_page_size(client, 50)?;
    let filter = ProjectsFilter::new().with_status(ProjectStatus::Active);
    let active = Project::list_all(&traversing, &filter).await?;
    println!("{} active projects", active.len());

    Ok(())
}
