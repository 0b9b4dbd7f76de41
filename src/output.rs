//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use serde::Serialize;

use crate::{Project, RedmineError, Result};

/// Render a value as pretty-printed JSON for `--json` output.
///
/// # Errors
///
/// Returns [`RedmineError::Encode`] if the value cannot be serialized.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(RedmineError::Encode)
}

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Project {
    fn pretty_print(&self) -> String {
        let header = format!("Project #{}: {}", self.id, self.identifier);
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![header, divider, format!("Name:           {}", self.name)];

        if let Some(ref parent) = self.parent {
            if parent.name.is_empty() {
                lines.push(format!("Parent:         #{}", parent.id));
            } else {
                lines.push(format!("Parent:         {} (#{})", parent.name, parent.id));
            }
        }

        if let Some(status) = self.project_status() {
            lines.push(format!("Status:         {}", status));
        }

        if let Some(public) = self.is_public {
            let visibility = if public { "public" } else { "private" };
            lines.push(format!("Visibility:     {}", visibility));
        }

        if let Some(ref homepage) = self.homepage {
            if !homepage.is_empty() {
                lines.push(format!("Homepage:       {}", homepage));
            }
        }

        if !self.created_on.is_empty() {
            lines.push(format!("Created:        {}", self.created_on));
        }

        if !self.updated_on.is_empty() {
            lines.push(format!("Updated:        {}", self.updated_on));
        }

        for field in &self.custom_fields {
            let label = if field.name.is_empty() {
                format!("cf_{}", field.id)
            } else {
                field.name.clone()
            };
            lines.push(format!("{:<15} {}", format!("{label}:"), field.values().join(", ")));
        }

        if !self.description.is_empty() {
            lines.push(String::new());
            lines.push(self.description.clone());
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_pretty_print_format() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "My Project",
            "identifier": "my-project",
            "status": 5,
            "parent": { "id": 1, "name": "Root" },
            "description": "Line one"
        }))
        .unwrap();

        let output = project.pretty_print();
        assert!(output.starts_with("Project #3: my-project"));
        assert!(output.contains("Name:           My Project"));
        assert!(output.contains("Parent:         Root (#1)"));
        assert!(output.contains("Status:         closed"));
        assert!(output.ends_with("Line one"));
    }

    #[test]
    fn test_to_json_renders_project() {
        let json = to_json(&Project::new("Docs", "docs")).unwrap();

        assert!(json.contains("\"identifier\": \"docs\""));
    }

    #[test]
    fn test_to_json_failure_is_encode_error() {
        // JSON object keys must be strings.
        let value: std::collections::BTreeMap<(u8, u8), u8> = [((1, 2), 3)].into_iter().collect();

        let err = to_json(&value).unwrap_err();

        assert!(matches!(err, RedmineError::Encode(_)), "got {err:?}");
        assert!(err.to_string().starts_with("Failed to encode JSON output"));
    }
}
