//! CLI argument parsing tests.

use clap::Parser;
use redmineapi::cli::{Cli, Command, Entity};
use redmineapi::ProjectStatus;

#[test]
fn test_cli_parses_get_subcommand() {
    let cli = Cli::parse_from(["redmineapi", "get", "project", "42"]);

    assert!(!cli.json);
    match cli.command {
        Command::Get { entity, id } => {
            assert!(matches!(entity, Entity::Project));
            assert_eq!(id, 42);
        }
        _ => panic!("Expected Get command"),
    }
}

#[test]
fn test_cli_rejects_non_numeric_id() {
    let result = Cli::try_parse_from(["redmineapi", "get", "project", "my-project"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_parses_list_subcommand() {
    let cli = Cli::parse_from(["redmineapi", "list", "projects"]);

    match cli.command {
        Command::List {
            entity,
            limit,
            offset,
            status,
            status_not,
            all,
        } => {
            assert!(matches!(entity, Entity::Project));
            assert_eq!(limit, None);
            assert_eq!(offset, None);
            assert_eq!(status, None);
            assert_eq!(status_not, None);
            assert!(!all);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_list_pagination_and_status_args() {
    let cli = Cli::parse_from([
        "redmineapi",
        "list",
        "projects",
        "--limit",
        "50",
        "--offset",
        "100",
        "--status",
        "closed",
    ]);

    match cli.command {
        Command::List {
            limit,
            offset,
            status,
            ..
        } => {
            assert_eq!(limit, Some(50));
            assert_eq!(offset, Some(100));
            assert_eq!(status, Some(ProjectStatus::Closed));
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_list_all_conflicts_with_offset() {
    let result = Cli::try_parse_from(["redmineapi", "list", "projects", "--all", "--offset", "5"]);
    assert!(result.is_err());

    let cli = Cli::parse_from(["redmineapi", "list", "projects", "--all", "--limit", "10"]);
    assert!(matches!(
        cli.command,
        Command::List {
            all: true,
            limit: Some(10),
            ..
        }
    ));
}

#[test]
fn test_status_and_status_not_conflict() {
    let result = Cli::try_parse_from([
        "redmineapi",
        "list",
        "projects",
        "--status",
        "active",
        "--status-not",
        "archived",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_cli_parses_create_subcommand() {
    let cli = Cli::parse_from([
        "redmineapi",
        "create",
        "project",
        "--name",
        "Docs",
        "--identifier",
        "docs",
        "--parent",
        "1",
    ]);

    match cli.command {
        Command::Create {
            name,
            identifier,
            description,
            parent,
            ..
        } => {
            assert_eq!(name, "Docs");
            assert_eq!(identifier, "docs");
            assert_eq!(description, None);
            assert_eq!(parent, Some(1));
        }
        _ => panic!("Expected Create command"),
    }
}

#[test]
fn test_cli_parses_update_and_delete() {
    let cli = Cli::parse_from(["redmineapi", "update", "project", "7", "--name", "New Name"]);
    match cli.command {
        Command::Update { id, name, .. } => {
            assert_eq!(id, 7);
            assert_eq!(name, Some("New Name".to_string()));
        }
        _ => panic!("Expected Update command"),
    }

    let cli = Cli::parse_from(["redmineapi", "delete", "projects", "7"]);
    assert!(matches!(cli.command, Command::Delete { id: 7, .. }));
}

#[test]
fn test_global_flags() {
    // --json before subcommand
    let cli = Cli::parse_from(["redmineapi", "--json", "list", "projects"]);
    assert!(cli.json);

    // global flags after subcommand
    let cli = Cli::parse_from([
        "redmineapi",
        "list",
        "projects",
        "--json",
        "--switch-user",
        "jsmith",
    ]);
    assert!(cli.json);
    assert_eq!(cli.switch_user.as_deref(), Some("jsmith"));
}
