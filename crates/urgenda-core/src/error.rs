//! Core error types for urgenda-core.
//!
//! Input-validation failures are surfaced at the mutation boundary and
//! never reach the scoring or sorting core. Persistence reads recover
//! locally (missing or malformed state loads as empty); only writes can
//! surface a store error.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::ItemId;

/// Top-level error type for planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Input rejected at the mutation boundary.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No active item carries this id (stale or foreign reference).
    #[error("no item with id {0}")]
    UnknownId(ItemId),

    /// Persistence backend failure.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration failure.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Serialization of planner state failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejections produced by the mutation boundary.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    /// Weight must be positive and finite to keep every score finite.
    #[error("weight must be a positive finite number, got {value}")]
    InvalidWeight { value: String },

    #[error("subtask index {index} out of range for task with {len} subtasks")]
    SubtaskIndexOutOfRange { index: usize, len: usize },
}

impl ValidationError {
    pub(crate) fn invalid_weight(value: f64) -> Self {
        ValidationError::InvalidWeight {
            value: value.to_string(),
        }
    }
}

/// Key-value store failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("query failed: {0}")]
    QueryFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::QueryFailed(err.to_string())
    }
}

/// Configuration load/save failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse configuration from {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },

    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },
}

/// Result type alias for planner operations.
pub type Result<T, E = PlannerError> = std::result::Result<T, E>;
