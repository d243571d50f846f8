//! Persistence contract and backends.
//!
//! The core persists through a minimal key-value contract: three keys, each
//! holding a JSON-encoded array. Backends only need `get`/`set`; everything
//! else (shapes, fail-soft reads) lives in the planner.

mod config;
pub mod memory;
pub mod sqlite;

pub use config::Config;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::path::PathBuf;

use crate::error::StoreError;

/// Key holding the JSON array of active tasks.
pub const TASKS_KEY: &str = "tasks";
/// Key holding the JSON array of active exams.
pub const EXAMS_KEY: &str = "exams";
/// Key holding the JSON array of completed item names.
pub const COMPLETED_KEY: &str = "completed";

/// Minimal key-value persistence contract.
///
/// `get` of an absent key is `Ok(None)`, which callers treat as the empty
/// collection; `set` overwrites unconditionally.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Returns `~/.config/urgenda[-dev]/` based on URGENDA_ENV.
///
/// Set URGENDA_ENV=dev to use the development data directory, or
/// URGENDA_DATA_DIR to override the location outright (used for test
/// isolation).
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let dir = match std::env::var("URGENDA_DATA_DIR") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("URGENDA_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("urgenda-dev")
            } else {
                base_dir.join("urgenda")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
