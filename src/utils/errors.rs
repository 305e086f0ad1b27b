use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for topology generation
#[derive(Error, Debug)]
pub enum TopologyError {
    #[error("cannot read server list {path}: {source}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("server list is missing required column `{0}`")]
    MissingColumn(String),

    #[error("malformed server row at line {line}: {source}")]
    MalformedRow {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// Convenience alias
pub type Result<T> = std::result::Result<T, TopologyError>;
