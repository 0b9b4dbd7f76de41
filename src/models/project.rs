//! Project model and trait implementations.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};

use crate::client::RedmineClient;
use crate::error::Result;
use crate::filter::Filter;
use crate::models::{CustomField, IdName};
use crate::pagination::{Page, PageInfo, Pagination};
use crate::traits::{Create, Delete, Get, List, Update};

const PROJECTS_PATH: &str = "/projects.json";

fn project_path(id: u64) -> String {
    format!("/projects/{id}.json")
}

fn is_zero(id: &u64) -> bool {
    *id == 0
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> core::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A Redmine project.
///
/// Projects group issues, wiki pages and members, and may be nested under
/// a parent project. The server owns `id`, `created_on` and `updated_on`;
/// they are left out of request bodies when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Numeric project ID (0 until the server assigns one).
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: u64,

    /// Parent project, for subprojects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<IdName>,

    /// Display name.
    pub name: String,

    /// Unique slug used in URLs (e.g., "my-project").
    pub identifier: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,

    /// Numeric status code; see [`ProjectStatus`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,

    /// Creation timestamp, as sent by the server.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_on: String,

    /// Last update timestamp, as sent by the server.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub updated_on: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomField>,
}

impl Project {
    /// A project ready to be created.
    pub fn new(name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Nest the project under `parent_id`.
    #[must_use]
    pub fn with_parent(mut self, parent_id: u64) -> Self {
        self.parent = Some(IdName::new(parent_id, ""));
        self
    }

    #[must_use]
    pub fn with_custom_field(mut self, field: CustomField) -> Self {
        self.custom_fields.push(field);
        self
    }

    /// ID of the parent project, if any.
    pub fn parent_id(&self) -> Option<u64> {
        self.parent.as_ref().map(|p| p.id)
    }

    /// Decoded status, when the server reported a known code.
    pub fn project_status(&self) -> Option<ProjectStatus> {
        self.status.and_then(ProjectStatus::from_code)
    }

    /// Custom field by ID.
    pub fn custom_field(&self, id: u64) -> Option<&CustomField> {
        self.custom_fields.iter().find(|f| f.id == id)
    }
}

/// Project status values accepted by the `status` list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    /// Any status.
    All,
    Active,
    Closed,
    Archived,
}

impl ProjectStatus {
    /// Wire value for the `status` filter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Active => "1",
            Self::Closed => "5",
            Self::Archived => "9",
        }
    }

    /// Map a project's numeric status code.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Active),
            5 => Some(Self::Closed),
            9 => Some(Self::Archived),
            _ => None,
        }
    }
}

impl AsRef<str> for ProjectStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Closed => "closed",
            Self::Archived => "archived",
        };
        f.write_str(label)
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" | "" => Ok(Self::All),
            "active" | "1" => Ok(Self::Active),
            "closed" | "5" => Ok(Self::Closed),
            "archived" | "9" => Ok(Self::Archived),
            other => Err(format!("unknown project status '{other}'")),
        }
    }
}

/// Query filter for listing projects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectsFilter {
    filter: Filter,
}

impl ProjectsFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only projects with `status`.
    pub fn status(&mut self, status: impl AsRef<str>) {
        self.filter.add_pair("status", status.as_ref());
    }

    /// Only projects whose status is not `status`.
    pub fn status_not(&mut self, status: impl AsRef<str>) {
        self.filter
            .add_pair("status", format!("!{}", status.as_ref()));
    }

    #[must_use]
    pub fn with_status(mut self, status: impl AsRef<str>) -> Self {
        self.status(status);
        self
    }

    #[must_use]
    pub fn with_status_not(mut self, status: impl AsRef<str>) -> Self {
        self.status_not(status);
        self
    }

    /// Set an arbitrary query parameter (e.g., a custom field `cf_4`).
    pub fn add_pair(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.filter.add_pair(key, value);
    }

    #[must_use]
    pub fn with_pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_pair(key, value);
        self
    }

    /// The underlying query parameters.
    pub fn filter(&self) -> &Filter {
        &self.filter
    }
}

impl AsRef<Filter> for ProjectsFilter {
    fn as_ref(&self) -> &Filter {
        &self.filter
    }
}

impl From<Filter> for ProjectsFilter {
    fn from(filter: Filter) -> Self {
        Self { filter }
    }
}

/// Request body for create and update.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProjectRequest {
    pub project: ProjectAttributes,
}

impl From<&Project> for ProjectRequest {
    fn from(project: &Project) -> Self {
        Self {
            project: ProjectAttributes::from(project),
        }
    }
}

/// Writable project attributes.
///
/// Reads carry the parent as an `{id, name}` object; writes take a bare
/// `parent_id`. Server-owned fields (`id`, `status`, timestamps) are never
/// sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct ProjectAttributes {
    pub name: String,
    pub identifier: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomField>,
}

impl From<&Project> for ProjectAttributes {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            identifier: project.identifier.clone(),
            description: project.description.clone(),
            parent_id: project.parent_id(),
            homepage: project.homepage.clone(),
            is_public: project.is_public,
            custom_fields: project.custom_fields.clone(),
        }
    }
}

impl From<ProjectAttributes> for Project {
    fn from(attributes: ProjectAttributes) -> Self {
        Self {
            parent: attributes.parent_id.map(|id| IdName::new(id, "")),
            name: attributes.name,
            identifier: attributes.identifier,
            description: attributes.description,
            homepage: attributes.homepage,
            is_public: attributes.is_public,
            custom_fields: attributes.custom_fields,
            ..Default::default()
        }
    }
}

/// API response wrapper for a single project.
#[derive(Debug, Deserialize)]
struct ProjectResponse {
    project: Project,
}

/// API response wrapper for listing projects.
#[derive(Debug, Deserialize)]
struct ProjectListResponse {
    projects: Vec<Project>,
    #[serde(flatten)]
    page: PageInfo,
}

#[async_trait]
impl Get for Project {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &RedmineClient, id: u64) -> Result<Self> {
        let url = client.build_url_with(&project_path(id), &Filter::new(), Pagination::unset())?;

        let response = client.get(url).await?;
        let data: ProjectResponse = RedmineClient::decode(response, StatusCode::OK).await?;
        Ok(data.project)
    }
}

#[async_trait]
impl List for Project {
    type Filter = ProjectsFilter;

    #[tracing::instrument(skip(client))]
    async fn list_page(
        client: &RedmineClient,
        filter: &Self::Filter,
        pagination: Pagination,
    ) -> Result<Page<Self>> {
        let url = client.build_url_with(PROJECTS_PATH, filter.as_ref(), pagination)?;

        let response = client.get(url).await?;
        let data: ProjectListResponse = RedmineClient::decode(response, StatusCode::OK).await?;
        Ok(Page::new(data.projects, data.page))
    }
}

#[async_trait]
impl Create for Project {
    #[tracing::instrument(skip(client, entity), fields(identifier = %entity.identifier))]
    async fn create(client: &RedmineClient, entity: &Self) -> Result<Self> {
        let url = client.build_url_with(PROJECTS_PATH, &Filter::new(), Pagination::unset())?;

        let response = client.post(url, &ProjectRequest::from(entity)).await?;
        let data: ProjectResponse = RedmineClient::decode(response, StatusCode::CREATED).await?;
        tracing::info!(id = data.project.id, "project created");
        Ok(data.project)
    }
}

#[async_trait]
impl Update for Project {
    #[tracing::instrument(skip(client, entity), fields(id = entity.id))]
    async fn update(client: &RedmineClient, entity: &Self) -> Result<()> {
        let url = client.build_url_with(
            &project_path(entity.id),
            &Filter::new(),
            Pagination::unset(),
        )?;

        let response = client.put(url, &ProjectRequest::from(entity)).await?;
        RedmineClient::acknowledge(response).await
    }
}

#[async_trait]
impl Delete for Project {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &RedmineClient, id: u64) -> Result<()> {
        let url = client.build_url_with(&project_path(id), &Filter::new(), Pagination::unset())?;

        let response = client.delete(url).await?;
        RedmineClient::acknowledge(response).await
    }
}
