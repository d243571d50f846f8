//! # Urgenda Core Library
//!
//! Core business logic for Urgenda, a planner that tracks tasks and exams
//! and continuously ranks them by urgency. The CLI binary is a thin layer
//! over this library; any other front end consumes the same commands and
//! snapshots.
//!
//! ## Architecture
//!
//! - **Urgency**: the pure scoring formula and the four-tier classifier
//! - **Collections**: ranked containers that recompute derived fields and
//!   stable-sort by score descending
//! - **Scheduler**: a wall-clock tick driver that requires the caller to
//!   invoke `tick()` periodically -- no internal threads, injectable clock
//! - **Planner**: the session state container exposing command handlers
//!   and a read-only snapshot query
//! - **Storage**: a key-value persistence contract with in-memory and
//!   SQLite backends, plus TOML configuration
//!
//! ## Key Components
//!
//! - [`Planner`]: session state and command surface
//! - [`urgency_score`] / [`Tier`]: scoring and classification
//! - [`RecomputeScheduler`]: periodic recompute driver
//! - [`KvStore`]: persistence contract

pub mod collection;
pub mod completion;
pub mod error;
pub mod events;
pub mod model;
pub mod planner;
pub mod scheduler;
pub mod storage;
pub mod urgency;

pub use collection::{days_until, PrioritizedCollection, Urgent};
pub use completion::CompletionLog;
pub use error::{ConfigError, PlannerError, Result, StoreError, ValidationError};
pub use events::Event;
pub use model::{DueSpec, Exam, ItemId, Subtask, Task};
pub use planner::{ExamView, Planner, PlannerSnapshot, TaskView};
pub use scheduler::{RecomputeScheduler, SchedulerState};
pub use storage::{data_dir, Config, KvStore, MemoryStore, SqliteStore};
pub use urgency::{score_breakdown, urgency_score, ScoreBreakdown, Tier};
