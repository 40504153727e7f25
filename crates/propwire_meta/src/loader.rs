//! Loading type metadata documents into a [`TypeIndex`].
//!
//! Documents list classes under a top-level `types` array, in JSON or TOML:
//!
//! ```toml
//! [[types]]
//! fqcn = "com.example.Target"
//! superclass = "com.example.Base"
//!
//! [[types.methods]]
//! name = "setCount"
//! parameters = ["long"]
//! ```

use crate::index::{TypeEntry, TypeIndex};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to read type metadata {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON type metadata: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid TOML type metadata: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported metadata format for {path} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },
    #[error("type `{fqcn}` is declared more than once")]
    DuplicateType { fqcn: String },
}

#[derive(Debug, Deserialize)]
struct IndexDocument {
    #[serde(default)]
    types: Vec<TypeEntry>,
}

impl TypeIndex {
    pub fn from_json_str(source: &str) -> Result<Self, IndexError> {
        let document: IndexDocument = serde_json::from_str(source)?;
        Self::from_document(document)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, IndexError> {
        let document: IndexDocument = toml::from_str(source)?;
        Self::from_document(document)
    }

    /// Reads a metadata file, choosing the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self, IndexError> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("toml") => Self::from_toml_str,
            _ => {
                return Err(IndexError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        let source = fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let index = parse(&source)?;
        debug!(path = %path.display(), types = index.len(), "loaded type metadata");
        Ok(index)
    }

    fn from_document(document: IndexDocument) -> Result<Self, IndexError> {
        let mut index = TypeIndex::new();
        for entry in document.types {
            if index.contains(&entry.fqcn) {
                return Err(IndexError::DuplicateType { fqcn: entry.fqcn });
            }
            index.add_type(entry);
        }

        for (owner, missing) in index.dangling_references() {
            warn!(ty = owner, supertype = missing, "supertype is not described by the metadata");
        }
        Ok(index)
    }
}
