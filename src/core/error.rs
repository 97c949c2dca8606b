//! Error types for the spike brush

use thiserror::Error;

/// Main error type for the crate
///
/// The apply path never returns errors (invalid shape combinations are
/// silent no-ops); these variants only surface from the configuration
/// boundary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("options error: {0}")]
    Options(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
