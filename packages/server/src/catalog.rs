//! Project catalog: the read-only list of portfolio projects served by the API.
//!
//! The catalog is loaded once at startup, either from a JSON file shaped like
//! `{ "projects": [...] }` or from the bundled default data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Default catalog bundled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/portfolio-projects.json");

/// Keys copied from a project into its summary, besides the slug.
const SUMMARY_FIELDS: [&str; 7] = [
    "id",
    "title",
    "thumbnail",
    "shortDescription",
    "technologies",
    "status",
    "year",
];

/// A full project record, as returned by the detail endpoint.
///
/// Only the slug is typed: it is what lookups key on. Every other field is
/// served exactly as it appears in the catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Project {
    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// The subset of a project shown on the carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub slug: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ProjectSummary {
    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }
}

impl From<&Project> for ProjectSummary {
    fn from(project: &Project) -> Self {
        let fields = SUMMARY_FIELDS
            .iter()
            .filter_map(|key| {
                project
                    .fields
                    .get(*key)
                    .map(|value| (key.to_string(), value.clone()))
            })
            .collect();
        Self {
            slug: project.slug.clone(),
            fields,
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read project catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("project catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// The catalog bundled with the binary.
    pub fn builtin() -> Self {
        // The bundled file is covered by tests; an empty catalog is the
        // fallback rather than a panic.
        Self::from_json(BUILTIN_CATALOG).unwrap_or_default()
    }

    /// Reads and parses a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&raw)?;
        debug!(path = %path.display(), projects = catalog.len(), "loaded project catalog");
        Ok(catalog)
    }

    /// Parses `{ "projects": [...] }`. A missing or non-array `projects`
    /// field yields an empty catalog; entries without a string slug are
    /// skipped, since nothing could ever look them up.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let root: Value = serde_json::from_str(raw)?;
        let entries = match root.get("projects") {
            Some(Value::Array(entries)) => entries.clone(),
            _ => Vec::new(),
        };

        let mut projects = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<Project>(entry) {
                Ok(project) => projects.push(project),
                Err(err) => warn!(index, error = %err, "skipping malformed project entry"),
            }
        }
        Ok(Self { projects })
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Summaries in catalog order.
    pub fn summaries(&self) -> Vec<ProjectSummary> {
        self.projects.iter().map(ProjectSummary::from).collect()
    }

    /// First project whose slug matches exactly.
    pub fn find(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.slug == slug)
    }
}
