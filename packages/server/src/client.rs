//! HTTP client for the project catalog API, with per-instance caching.
//!
//! The summary list is fetched once and reused for the lifetime of the
//! client; project details are cached by slug. Failed requests are never
//! cached and never retried.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, warn};

use crate::catalog::{Project, ProjectSummary};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const SERVER_ERROR_MESSAGE: &str = "A server error occurred. Please try again later.";
const SUMMARY_ERROR_MESSAGE: &str = "An error occurred while loading the projects.";
const DETAIL_ERROR_MESSAGE: &str = "An error occurred while loading the project.";

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS,
    /// timeout).
    #[error("unable to reach the server, check your connection: {0}")]
    NoResponse(#[source] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("{message} (HTTP {status})")]
    Http {
        status: u16,
        message: String,
        data: Option<Value>,
    },
    /// A success response whose body did not match any accepted shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("a project slug is required")]
    MissingSlug,
    #[error("invalid API base URL {0:?}")]
    InvalidBaseUrl(String),
    #[error("failed to build HTTP client: {0}")]
    Setup(#[source] reqwest::Error),
}

impl ClientError {
    /// HTTP status, when the server responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parsed error body, when the server sent JSON.
    pub fn data(&self) -> Option<&Value> {
        match self {
            ClientError::Http { data, .. } => data.as_ref(),
            _ => None,
        }
    }
}

/// The summary endpoint historically returned a bare array; both shapes are
/// accepted.
#[derive(Deserialize)]
#[serde(untagged)]
enum SummaryPayload {
    List(Vec<ProjectSummary>),
    Wrapped {
        #[serde(default)]
        projects: Vec<ProjectSummary>,
    },
}

impl SummaryPayload {
    fn into_list(self) -> Vec<ProjectSummary> {
        match self {
            SummaryPayload::List(projects) | SummaryPayload::Wrapped { projects } => projects,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DetailPayload {
    Wrapped { project: Project },
    Bare(Project),
}

impl DetailPayload {
    fn into_project(self) -> Project {
        match self {
            DetailPayload::Wrapped { project } | DetailPayload::Bare(project) => project,
        }
    }
}

pub struct ProjectsClient {
    http: reqwest::Client,
    base: Url,
    summary_cache: OnceCell<Vec<ProjectSummary>>,
    detail_cache: Mutex<HashMap<String, Project>>,
}

impl ProjectsClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base =
            Url::parse(base_url).map_err(|_| ClientError::InvalidBaseUrl(base_url.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ClientError::Setup)?;

        Ok(Self {
            http,
            base,
            summary_cache: OnceCell::new(),
            detail_cache: Mutex::new(HashMap::new()),
        })
    }

    /// Uses `API_BASE_URL`, falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    /// All project summaries. The first successful response is cached.
    pub async fn fetch_projects_summary(&self) -> Result<Vec<ProjectSummary>, ClientError> {
        let projects = self
            .summary_cache
            .get_or_try_init(|| async {
                let payload: SummaryPayload = self
                    .get_json(&["projects", "summary"], SUMMARY_ERROR_MESSAGE)
                    .await?;
                let projects = payload.into_list();
                debug!(count = projects.len(), "cached project summaries");
                Ok::<_, ClientError>(projects)
            })
            .await?;
        Ok(projects.clone())
    }

    /// One project by slug. Successful responses are cached per slug.
    pub async fn fetch_project_detail(&self, slug: &str) -> Result<Project, ClientError> {
        if slug.is_empty() {
            return Err(ClientError::MissingSlug);
        }
        if let Some(project) = self.detail_cache.lock().await.get(slug) {
            return Ok(project.clone());
        }

        let payload: DetailPayload = self
            .get_json(&["projects", slug], DETAIL_ERROR_MESSAGE)
            .await?;
        let project = payload.into_project();
        self.detail_cache
            .lock()
            .await
            .insert(slug.to_string(), project.clone());
        Ok(project)
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // cannot_be_a_base was rejected in `new`, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        fallback_message: &str,
    ) -> Result<T, ClientError> {
        let url = self.endpoint(segments);
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|err| {
                warn!(%url, error = %err, "request failed without a response");
                ClientError::NoResponse(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(http_error(status, &body, fallback_message));
        }

        let body = response.text().await.map_err(ClientError::NoResponse)?;
        serde_json::from_str(&body).map_err(|err| ClientError::Decode(err.to_string()))
    }
}

/// Builds the error for a non-success response, preferring the server's own
/// `message` field.
fn http_error(status: StatusCode, body: &str, fallback_message: &str) -> ClientError {
    let data: Option<Value> = serde_json::from_str(body).ok();
    let message = data
        .as_ref()
        .and_then(|value| value.get("message"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| {
            if status.is_server_error() {
                SERVER_ERROR_MESSAGE.to_string()
            } else {
                fallback_message.to_string()
            }
        });
    warn!(status = status.as_u16(), %message, "API returned an error");
    ClientError::Http {
        status: status.as_u16(),
        message,
        data,
    }
}
