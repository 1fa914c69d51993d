//! ap_io — JSON loading for the apportionment engine.
//!
//! Shared error type (`IoError`) plus the file-module `loader`. No network
//! I/O; reads local JSON only.

#![forbid(unsafe_code)]

use thiserror::Error;

pub mod loader;

pub use loader::{
    load_districts, load_inputs, load_national_results, load_parties, LoadedInputs, PartyMeta,
};

/// Unified error for ap_io.
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem / path errors.
    #[error("read error: {0}")]
    Read(String),

    /// JSON shape errors.
    #[error("json error: {0}")]
    Json(String),

    /// Generic validation / invariants on loaded data.
    #[error("invalid input: {0}")]
    Invalid(String),
}

pub type IoResult<T> = Result<T, IoError>;

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Read(e.to_string())
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json(e.to_string())
    }
}
