use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, CatalogError, Project, ProjectSummary};
use crate::error::ApiError;

const SUMMARY_UNAVAILABLE: &str = "Unable to load the project list.";
const DETAIL_UNAVAILABLE: &str = "Unable to load this project.";

/// Shared handler state. The catalog is loaded once and never mutated; a
/// failed load is kept so every request reports it.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Result<Catalog, CatalogError>>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(Ok(catalog)),
        }
    }

    pub fn unavailable(err: CatalogError) -> Self {
        Self {
            catalog: Arc::new(Err(err)),
        }
    }

    pub fn from_load(result: Result<Catalog, CatalogError>) -> Self {
        Self {
            catalog: Arc::new(result),
        }
    }

    fn catalog(&self, message: &'static str) -> Result<&Catalog, ApiError> {
        match &*self.catalog {
            Ok(catalog) => Ok(catalog),
            Err(err) => Err(ApiError::Unavailable {
                message,
                reason: err.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub projects: Vec<ProjectSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailResponse {
    pub project: Project,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/projects/summary", get(projects_summary))
        .route("/api/projects/{slug}", get(project_detail))
        .with_state(state)
}

async fn projects_summary(
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let catalog = state.catalog(SUMMARY_UNAVAILABLE)?;
    debug!(projects = catalog.len(), "serving project summaries");
    Ok(Json(SummaryResponse {
        projects: catalog.summaries(),
    }))
}

async fn project_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<DetailResponse>, ApiError> {
    let catalog = state.catalog(DETAIL_UNAVAILABLE)?;
    let project = catalog
        .find(&slug)
        .cloned()
        .ok_or(ApiError::NotFound(slug))?;
    Ok(Json(DetailResponse { project }))
}
