use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while setting up the showroom or handling interaction requests.
#[derive(Debug, Error)]
pub enum ShowroomError {
    #[error("missing dependency: {0}")]
    MissingDependency(&'static str),

    #[error("device index {index} out of range (have {len} devices)")]
    InvalidDeviceIndex { index: usize, len: usize },

    #[error("cannot {requested} while {from}")]
    InvalidStateTransition {
        from: &'static str,
        requested: &'static str,
    },

    #[error("device {0} has no captured resting pose")]
    UninitializedDevice(usize),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl ShowroomError {
    /// Requests refused because of the current session state are expected
    /// during normal play and are not worth a warning.
    pub fn is_ignorable(&self) -> bool {
        matches!(self, ShowroomError::InvalidStateTransition { .. })
    }
}
