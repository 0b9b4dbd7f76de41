//! Create trait for adding new entities.

use async_trait::async_trait;

use crate::client::RedmineClient;
use crate::error::Result;

/// Create a new entity.
///
/// The server assigns the ID; whatever the caller put in the ID field is
/// not relied upon.
#[async_trait]
pub trait Create: Sized {
    /// Create `entity` and return the server's copy, ID included.
    ///
    /// # Errors
    ///
    /// Returns the server's validation messages on any status other than 201.
    async fn create(client: &RedmineClient, entity: &Self) -> Result<Self>;
}
