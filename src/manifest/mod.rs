//! Author extraction from package metadata
//!
//! `package.json` files and npm packuments share the same person fields
//! (`author`, `contributors`, `maintainers`), so both go through
//! [`PackageAuthors::from_metadata`].

use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::author::record::AuthorRecord;

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Expected a JSON object at the top level")]
    NotAnObject,
}

/// Every person listed for a package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageAuthors {
    pub name: Option<String>,
    pub author: Option<AuthorRecord>,
    pub contributors: Vec<AuthorRecord>,
    pub maintainers: Vec<AuthorRecord>,
}

impl PackageAuthors {
    /// Collects person fields from a metadata object.
    /// Missing or odd-typed fields are treated as absent.
    pub fn from_metadata(metadata: &Value) -> Result<Self, ManifestError> {
        let object = metadata.as_object().ok_or(ManifestError::NotAnObject)?;

        Ok(Self {
            name: object.get("name").and_then(Value::as_str).map(str::to_string),
            author: object.get("author").and_then(AuthorRecord::from_value),
            contributors: people(object.get("contributors"), "contributors"),
            maintainers: people(object.get("maintainers"), "maintainers"),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.contributors.is_empty() && self.maintainers.is_empty()
    }
}

fn people(value: Option<&Value>, field: &str) -> Vec<AuthorRecord> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().filter_map(AuthorRecord::from_value).collect(),
        // A lone person where a list was expected
        Some(single @ (Value::String(_) | Value::Object(_))) => {
            AuthorRecord::from_value(single).into_iter().collect()
        }
        Some(other) => {
            warn!("Ignoring {} field of unexpected type: {}", field, other);
            Vec::new()
        }
    }
}

pub fn authors_from_package_json(content: &str) -> Result<PackageAuthors, ManifestError> {
    let metadata: Value = serde_json::from_str(content)?;
    PackageAuthors::from_metadata(&metadata)
}

pub fn read_package_json(path: &Path) -> Result<PackageAuthors, ManifestError> {
    debug!("Reading package manifest {:?}", path);
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.display().to_string(),
        source,
    })?;
    authors_from_package_json(&content)
}
