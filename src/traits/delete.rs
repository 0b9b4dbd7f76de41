//! Delete trait for removing entities.

use async_trait::async_trait;

use crate::client::RedmineClient;
use crate::error::Result;

/// Delete an entity by ID.
#[async_trait]
pub trait Delete {
    /// The ID type for this entity.
    type Id: Send;

    /// Delete the entity.
    ///
    /// # Errors
    ///
    /// Returns [`RedmineError::NotFound`](crate::RedmineError::NotFound) on
    /// 404, or the server's messages on any other non-200 status.
    async fn delete(client: &RedmineClient, id: Self::Id) -> Result<()>;
}
