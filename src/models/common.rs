//! Types shared by several Redmine resources.

use serde::{Deserialize, Serialize};

/// A reference to another record by ID and display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdName {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

impl IdName {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A custom field value attached to a record.
///
/// Redmine sends single values as strings and multi-value fields as arrays,
/// so the value is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub multiple: bool,
    #[serde(default)]
    pub value: serde_json::Value,
}

impl CustomField {
    /// A single-valued field.
    pub fn new(id: u64, value: impl Into<String>) -> Self {
        Self {
            id,
            name: String::new(),
            multiple: false,
            value: serde_json::Value::String(value.into()),
        }
    }

    /// The value as text, when it is a single string.
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }

    /// All string values, whether the field holds one or many.
    pub fn values(&self) -> Vec<&str> {
        match &self.value {
            serde_json::Value::String(s) => vec![s.as_str()],
            serde_json::Value::Array(items) => items.iter().filter_map(|v| v.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}
