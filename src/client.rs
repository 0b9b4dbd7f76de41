//! Redmine API client.
//!
//! Low-level HTTP client that handles authentication, URL construction and
//! response status mapping. Higher-level operations are implemented via
//! traits on entity types.

use std::env;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{RedmineError, Result};
use crate::filter::Filter;
use crate::pagination::Pagination;

const USER_AGENT: &str = concat!("redmineapi/", env!("CARGO_PKG_VERSION"));

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-Redmine-API-Key";

/// Header selecting the user to act as.
pub const SWITCH_USER_HEADER: &str = "X-Redmine-Switch-User";

/// Low-level Redmine API client.
///
/// Handles authentication and HTTP requests. Entity-specific operations
/// are implemented via the `Get`, `List`, `Create`, `Update` and `Delete`
/// traits on model types.
///
/// Cloning is cheap; clones share the underlying connection pool but own
/// their impersonation and pagination settings.
///
/// # Example
///
/// ```no_run
/// use redmineapi::RedmineClient;
///
/// # fn example() -> redmineapi::Result<()> {
/// // Create from environment variables
/// let client = RedmineClient::from_env()?;
///
/// // Or configure manually
/// let mut client = RedmineClient::new("https://redmine.example.com", "your-api-key")?;
/// client.set_impersonated_user("jsmith");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RedmineClient {
    http: Client,
    endpoint: String,
    api_key: String,
    switch_user: Option<String>,
    pagination: Pagination,
}

impl std::fmt::Debug for RedmineClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedmineClient")
            .field("endpoint", &self.endpoint)
            .field("switch_user", &self.switch_user)
            .field("pagination", &self.pagination)
            .finish_non_exhaustive()
    }
}

/// Error body returned by Redmine on failed requests.
#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct ErrorEnvelope {
    pub errors: Vec<String>,
}

impl RedmineClient {
    /// Create a client from environment variables.
    ///
    /// Uses `REDMINE_URL` and `REDMINE_API_KEY`, and optionally
    /// `REDMINE_SWITCH_USER` to act as another user.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is not set.
    pub fn from_env() -> Result<Self> {
        let endpoint = env::var("REDMINE_URL").map_err(|_| {
            RedmineError::ConfigMissing("REDMINE_URL environment variable not set".to_string())
        })?;
        let api_key = env::var("REDMINE_API_KEY").map_err(|_| {
            RedmineError::ConfigMissing("REDMINE_API_KEY environment variable not set".to_string())
        })?;

        let mut client = Self::new(&endpoint, &api_key)?;
        if let Ok(login) = env::var("REDMINE_SWITCH_USER") {
            client.set_impersonated_user(&login);
        }
        Ok(client)
    }

    /// Create a new client with no pagination parameters and no impersonation.
    ///
    /// The endpoint is only parsed when a request URL is built, so a
    /// malformed endpoint surfaces as [`RedmineError::MalformedEndpoint`]
    /// from the first operation, before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(endpoint: &str, api_key: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(RedmineError::Transport)?;

        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
            switch_user: None,
            pagination: Pagination::unset(),
        })
    }

    /// Replace the default pagination used by single-page list calls.
    #[must_use]
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    /// Act as `login` on all subsequent requests.
    #[must_use]
    pub fn with_impersonated_user(mut self, login: &str) -> Self {
        self.set_impersonated_user(login);
        self
    }

    /// The configured endpoint, as given.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Login currently impersonated, if any.
    pub fn impersonated_user(&self) -> Option<&str> {
        self.switch_user.as_deref()
    }

    /// Default pagination for single-page list calls.
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Act as `login` on all subsequent requests. An empty login clears it.
    pub fn set_impersonated_user(&mut self, login: &str) {
        self.switch_user = (!login.is_empty()).then(|| login.to_string());
    }

    /// Stop impersonating.
    pub fn clear_impersonated_user(&mut self) {
        self.switch_user = None;
    }

    pub fn set_pagination(&mut self, pagination: Pagination) {
        self.pagination = pagination;
    }

    pub fn set_limit(&mut self, limit: Option<u32>) {
        self.pagination.limit = limit;
    }

    pub fn set_offset(&mut self, offset: Option<u32>) {
        self.pagination.offset = offset;
    }

    /// Build a request URL using the client's default pagination.
    ///
    /// # Errors
    ///
    /// Returns [`RedmineError::MalformedEndpoint`] if the endpoint cannot be parsed.
    pub fn build_url(&self, path: &str, filter: &Filter) -> Result<Url> {
        self.build_url_with(path, filter, self.pagination)
    }

    /// Build a request URL with explicit pagination.
    ///
    /// `path` is appended to the endpoint's own path. Query parameters are
    /// `limit`, then `offset`, then the filter pairs in order; unset
    /// pagination fields are left out. A filter pair named `limit` or
    /// `offset` is dropped when the matching pagination field is set.
    ///
    /// # Errors
    ///
    /// Returns [`RedmineError::MalformedEndpoint`] if the endpoint cannot be parsed.
    pub fn build_url_with(
        &self,
        path: &str,
        filter: &Filter,
        pagination: Pagination,
    ) -> Result<Url> {
        let mut url = Url::parse(&self.endpoint)?;

        let full_path = format!("{}{}", url.path().trim_end_matches('/'), path);
        url.set_path(&full_path);
        url.set_query(None);

        let mut params: Vec<(String, String)> = Vec::with_capacity(filter.pairs().len() + 2);
        if let Some(limit) = pagination.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = pagination.offset {
            params.push(("offset".to_string(), offset.to_string()));
        }
        // Pagination set on the request wins over same-named filter pairs.
        params.extend(
            filter
                .pairs()
                .iter()
                .filter(|(key, _)| match key.as_str() {
                    "limit" => pagination.limit.is_none(),
                    "offset" => pagination.offset.is_none(),
                    _ => true,
                })
                .cloned(),
        );

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        Ok(url)
    }

    /// Attach authentication headers and send the request.
    ///
    /// Transport failures are returned as-is; nothing is retried.
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let mut request = request.header(API_KEY_HEADER, self.api_key.as_str());
        if let Some(login) = &self.switch_user {
            request = request.header(SWITCH_USER_HEADER, login.as_str());
        }

        request.send().await.map_err(RedmineError::Transport)
    }

    /// Make a GET request.
    #[tracing::instrument(skip(self, url), fields(url = %url))]
    pub async fn get(&self, url: Url) -> Result<Response> {
        self.execute(self.http.request(Method::GET, url)).await
    }

    /// Make a POST request with JSON body.
    #[tracing::instrument(skip(self, url, body), fields(url = %url))]
    pub async fn post<B: Serialize + ?Sized>(&self, url: Url, body: &B) -> Result<Response> {
        self.execute(self.http.request(Method::POST, url).json(body))
            .await
    }

    /// Make a PUT request with JSON body.
    #[tracing::instrument(skip(self, url, body), fields(url = %url))]
    pub async fn put<B: Serialize + ?Sized>(&self, url: Url, body: &B) -> Result<Response> {
        self.execute(self.http.request(Method::PUT, url).json(body))
            .await
    }

    /// Make a DELETE request with an empty body.
    #[tracing::instrument(skip(self, url), fields(url = %url))]
    pub async fn delete(&self, url: Url) -> Result<Response> {
        self.execute(self.http.request(Method::DELETE, url)).await
    }

    /// Decode a JSON body if the response carries `expected`, otherwise
    /// turn it into an error.
    pub(crate) async fn decode<T: DeserializeOwned>(
        response: Response,
        expected: StatusCode,
    ) -> Result<T> {
        if response.status() != expected {
            return Err(Self::remote_error(response).await);
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Accept a mutation response that carries no payload.
    ///
    /// 404 maps to [`RedmineError::NotFound`] without reading the body.
    pub(crate) async fn acknowledge(response: Response) -> Result<()> {
        match response.status() {
            StatusCode::OK => Ok(()),
            StatusCode::NOT_FOUND => Err(RedmineError::NotFound),
            _ => Err(Self::remote_error(response).await),
        }
    }

    /// Convert a failed response into an error from its error envelope.
    async fn remote_error(response: Response) -> RedmineError {
        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return RedmineError::Transport(e),
        };

        match serde_json::from_slice::<ErrorEnvelope>(&body) {
            Ok(envelope) => {
                tracing::debug!(status = status.as_u16(), "request rejected by server");
                RedmineError::Remote {
                    message: envelope.errors.join("\n"),
                    status_code: status.as_u16(),
                }
            }
            Err(e) => RedmineError::Decode(e),
        }
    }
}
