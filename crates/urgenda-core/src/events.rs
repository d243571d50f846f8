use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ItemId;

/// Every mutation and every periodic recompute produces an Event.
/// Consumers (the CLI watch loop, a GUI) poll the planner for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TaskCreated {
        id: ItemId,
        name: String,
        at: DateTime<Utc>,
    },
    ExamCreated {
        id: ItemId,
        name: String,
        at: DateTime<Utc>,
    },
    ItemEdited {
        id: ItemId,
        at: DateTime<Utc>,
    },
    SubtasksChanged {
        id: ItemId,
        at: DateTime<Utc>,
    },
    ItemCompleted {
        id: ItemId,
        name: String,
        at: DateTime<Utc>,
    },
    /// Item discarded without being logged as completed.
    ItemDeleted {
        id: ItemId,
        name: String,
        at: DateTime<Utc>,
    },
    /// Periodic recompute pass finished; collections are freshly sorted.
    Recomputed {
        tasks: usize,
        exams: usize,
        at: DateTime<Utc>,
    },
}
