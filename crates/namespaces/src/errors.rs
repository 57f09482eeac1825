use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the public namespace API.
///
/// Only precondition violations reach callers; storage trouble is logged
/// by the store and never returned.
#[derive(Debug, Error)]
pub enum NamespaceError {
    #[error("validation error: {0}")]
    Validation(String),
}

impl NamespaceError {
    pub fn empty(arg: &str) -> Self { Self::Validation(format!("the {arg} value may not be empty")) }
}

/// Failures of the JSON file layer.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("expected a JSON object at the document root, found {0}")]
    NotAnObject(&'static str),
    #[error("cannot serialize namespaces: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl StorageError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }
}
