//! List trait for fetching collections of entities.

use async_trait::async_trait;

use crate::client::RedmineClient;
use crate::error::Result;
use crate::filter::Filter;
use crate::pagination::{page_count, Page, Pagination};
use crate::traversing::TraversingClient;

/// List/filter entities with pagination support.
///
/// # Example
///
/// ```ignore
/// use redmineapi::{List, Project, ProjectStatus, ProjectsFilter, RedmineClient, TraversingClient};
///
/// let client = RedmineClient::from_env()?;
///
/// // One page, using the client's pagination settings
/// let projects = Project::list(&client, &ProjectsFilter::default()).await?;
///
/// // Every page
/// let traversing = TraversingClient::from_client(client)?;
/// let filter = ProjectsFilter::new().with_status(ProjectStatus::Active);
/// let all_active = Project::list_all(&traversing, &filter).await?;
/// ```
#[async_trait]
pub trait List: Sized + Send {
    /// Filter type accepted by the list endpoint.
    type Filter: AsRef<Filter> + Default + Send + Sync;

    /// Fetch one page with explicit pagination.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    async fn list_page(
        client: &RedmineClient,
        filter: &Self::Filter,
        pagination: Pagination,
    ) -> Result<Page<Self>>;

    /// Fetch one page using the client's configured pagination.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    async fn list(client: &RedmineClient, filter: &Self::Filter) -> Result<Vec<Self>> {
        let page = Self::list_page(client, filter, client.pagination()).await?;
        Ok(page.items)
    }

    /// Fetch every page matching the filter.
    ///
    /// Pages are requested one after another, starting at offset 0 and
    /// advancing by the traversing client's page size. The page count is
    /// recomputed from each response's `total_count`, so the result is only
    /// as consistent as the server's collection while the walk is running.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; items fetched so far are dropped.
    async fn list_all(client: &TraversingClient, filter: &Self::Filter) -> Result<Vec<Self>> {
        let page_size = client.page_size();
        let mut pagination = Pagination::new(page_size.get(), 0);
        let mut items = Vec::new();
        let mut current_page: u64 = 0;
        let mut max_pages: u64 = 1;

        while current_page < max_pages {
            let page = Self::list_page(client.client(), filter, pagination).await?;
            tracing::debug!(
                offset = pagination.offset,
                received = page.items.len(),
                total_count = page.total_count,
                "fetched page"
            );

            items.extend(page.items);
            current_page += 1;
            max_pages = page_count(page.total_count, page_size);
            pagination.offset = pagination
                .offset
                .map(|offset| offset.saturating_add(page_size.get()));
        }

        Ok(items)
    }
}
