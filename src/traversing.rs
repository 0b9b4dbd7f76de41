//! Client wrapper that walks every page of a collection.

use std::num::NonZeroU32;
use std::ops::{Deref, DerefMut};

use crate::client::RedmineClient;
use crate::error::{RedmineError, Result};
use crate::pagination::Pagination;

/// Default page size for full traversals.
pub const DEFAULT_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(100) {
    Some(size) => size,
    None => unreachable!(),
};

/// A [`RedmineClient`] paired with a fixed page size, for
/// [`List::list_all`](crate::List::list_all).
///
/// Dereferences to the wrapped client, so every single-request operation
/// accepts it too.
#[derive(Debug, Clone)]
pub struct TraversingClient {
    client: RedmineClient,
    page_size: NonZeroU32,
}

impl TraversingClient {
    /// Create a traversing client with the default page size, starting at offset 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(endpoint: &str, api_key: &str) -> Result<Self> {
        let client = RedmineClient::new(endpoint, api_key)?
            .with_pagination(Pagination::new(DEFAULT_PAGE_SIZE.get(), 0));
        Ok(Self {
            client,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Wrap an existing client.
    ///
    /// The page size is the client's configured limit, or the default when
    /// it has none.
    ///
    /// # Errors
    ///
    /// Returns [`RedmineError::InvalidConfig`] if the client's limit is 0.
    pub fn from_client(client: RedmineClient) -> Result<Self> {
        let page_size = client.pagination().limit.unwrap_or(DEFAULT_PAGE_SIZE.get());
        Self::with_page_size(client, page_size)
    }

    /// Wrap an existing client with an explicit page size.
    ///
    /// # Errors
    ///
    /// Returns [`RedmineError::InvalidConfig`] if `page_size` is 0.
    pub fn with_page_size(client: RedmineClient, page_size: u32) -> Result<Self> {
        let page_size = NonZeroU32::new(page_size).ok_or_else(|| {
            RedmineError::InvalidConfig("page size must be greater than zero".to_string())
        })?;
        Ok(Self { client, page_size })
    }

    /// Number of items requested per page.
    pub fn page_size(&self) -> NonZeroU32 {
        self.page_size
    }

    /// The wrapped client.
    pub fn client(&self) -> &RedmineClient {
        &self.client
    }

    /// Unwrap into the plain client.
    pub fn into_inner(self) -> RedmineClient {
        self.client
    }
}

impl Deref for TraversingClient {
    type Target = RedmineClient;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl DerefMut for TraversingClient {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.client
    }
}
