//! Error types for the compose helpers

use std::path::PathBuf;
use thiserror::Error;

/// Result type for helper operations
pub type Result<T> = std::result::Result<T, HelperError>;

/// Helper error types
///
/// The `Display` text of the context variants is the exact diagnostic the
/// resolver prints, so callers can tell the failure paths apart.
#[derive(Error, Debug)]
pub enum HelperError {
    #[error("Failed to inspect Docker Context")]
    InspectFailed,

    #[error("Failed to parse Docker Context information")]
    ContextParse(#[source] serde_json::Error),

    #[error("Docker Context information is missing a required key")]
    MissingKey,

    #[error("Failed to stat Docker socket {}: {source}", path.display())]
    SocketStat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    ComposeRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
