//! Error type for configuration and statistics export.
//!
//! The tick protocol itself never fails; only the outer file-facing surfaces
//! return these errors.

/// Errors raised while loading, validating or saving simulation data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// A JSON document could not be encoded or decoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// A parameter set violates one of its invariants.
    #[error("invalid params: {0}")]
    InvalidParams(String),
}

/// Result alias used by the simulation's fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
