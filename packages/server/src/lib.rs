//! Read-only HTTP API serving the portfolio project catalog, plus a caching
//! client for it.

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod routes;

pub use catalog::{Catalog, CatalogError, Project, ProjectSummary};
pub use client::{ClientError, ProjectsClient};
pub use config::ServerConfig;
pub use error::{ApiError, ErrorBody};
pub use routes::{router, AppState, DetailResponse, SummaryResponse};

use tracing::{error, info};

/// Builds the handler state for a configuration. A catalog file that fails
/// to load is logged and reported by every request rather than aborting
/// startup.
pub fn load_state(config: &ServerConfig) -> AppState {
    match &config.projects_file {
        Some(path) => {
            let result = Catalog::load(path);
            match &result {
                Ok(catalog) => info!(
                    path = %path.display(),
                    projects = catalog.len(),
                    "project catalog loaded"
                ),
                Err(err) => error!(path = %path.display(), error = %err, "project catalog unavailable"),
            }
            AppState::from_load(result)
        }
        None => {
            let catalog = Catalog::builtin();
            info!(projects = catalog.len(), "serving bundled project catalog");
            AppState::new(catalog)
        }
    }
}
