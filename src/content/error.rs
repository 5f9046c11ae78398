use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or querying CMS content
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Menu not found: {0}")]
    MenuNotFound(String),

    #[error("Duplicate uri: {0}")]
    DuplicateUri(String),
}
