//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::RedmineClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// # Example
///
/// ```ignore
/// use redmineapi::{RedmineClient, Project, Get};
///
/// let client = RedmineClient::from_env()?;
/// let project = Project::get(&client, 42).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity.
    type Id: Send;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns [`RedmineError::Remote`](crate::RedmineError::Remote) with the
    /// server's messages on any status other than 200, or a decode error if
    /// the body is not the expected envelope.
    async fn get(client: &RedmineClient, id: Self::Id) -> Result<Self>;
}
