use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlangError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} must contain a JSON object at the top level")]
    NotAnObject { path: PathBuf },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type SlangResult<T> = Result<T, SlangError>;
