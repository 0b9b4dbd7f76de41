//! Update trait for modifying entities.

use async_trait::async_trait;

use crate::client::RedmineClient;
use crate::error::Result;

/// Update an existing entity.
///
/// The entity's own ID selects the record to modify. The server only
/// acknowledges the change; fetch the entity again to see the result.
///
/// # Example
///
/// ```ignore
/// use redmineapi::{RedmineClient, Project, Get, Update};
///
/// let client = RedmineClient::from_env()?;
/// let mut project = Project::get(&client, 42).await?;
/// project.description = "Now with a description".to_string();
/// Project::update(&client, &project).await?;
/// ```
#[async_trait]
pub trait Update: Sized {
    /// Send `entity` as the new state of the record with the same ID.
    ///
    /// # Errors
    ///
    /// Returns [`RedmineError::NotFound`](crate::RedmineError::NotFound) on
    /// 404, or the server's messages on any other non-200 status.
    async fn update(client: &RedmineClient, entity: &Self) -> Result<()>;
}
