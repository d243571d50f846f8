//! Item types: tasks, exams, and their persisted shapes.
//!
//! Derived fields (`days_left`, `score`) are stored for the benefit of
//! consumers reading the persisted JSON, but are never authoritative: the
//! planner recomputes them before any read that orders or classifies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable, opaque identifier assigned at creation.
///
/// Identity survives resorts and removals of other items, so a caller's
/// reference is never silently invalidated the way a positional index
/// would be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Due-date input for item creation: either a day offset from today or an
/// explicit calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueSpec {
    /// Due `n` days from today.
    InDays(u32),
    /// Due on the given date.
    OnDate(NaiveDate),
}

impl DueSpec {
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match *self {
            DueSpec::InDays(n) => today + chrono::Duration::days(i64::from(n)),
            DueSpec::OnDate(date) => date,
        }
    }
}

/// A checklist entry owned by a task. Opaque to scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl Subtask {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }
}

/// A due-dated work item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: ItemId,
    pub name: String,
    pub due_date: NaiveDate,
    /// Importance multiplier, always positive and finite.
    pub weight: f64,
    /// Derived: whole days until due at last recompute. Negative = overdue.
    #[serde(default)]
    pub days_left: i64,
    /// Derived: urgency score at last recompute.
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

impl Task {
    pub fn new(name: impl Into<String>, due_date: NaiveDate, weight: f64) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            due_date,
            weight,
            days_left: 0,
            score: 0.0,
            subtasks: Vec::new(),
        }
    }
}

/// An exam. No stored day count; it is recomputed from `date` on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exam {
    pub id: ItemId,
    pub name: String,
    pub date: NaiveDate,
    /// Importance multiplier, always positive and finite.
    pub weight: f64,
    /// Derived: urgency score at last recompute.
    #[serde(default)]
    pub score: f64,
}

impl Exam {
    pub fn new(name: impl Into<String>, date: NaiveDate, weight: f64) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            date,
            weight,
            score: 0.0,
        }
    }
}
