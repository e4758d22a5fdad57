//! The single failure type of a load.

use thiserror::Error;

/// Why the project document could not be loaded.
///
/// Every variant ends the render pass; none of them is retried.
#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error("invalid renderer config: {0}")]
    Config(&'static str),

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error("malformed project document: {0}")]
    Parse(#[from] serde_json::Error),
}
