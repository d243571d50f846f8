//! Session state container and command handlers.
//!
//! A [`Planner`] owns the two ranked collections, the completion log, the
//! recompute scheduler, and a persistence handle. UI layers never touch
//! state directly: they invoke the command handlers here and read back
//! through [`Planner::snapshot`]. Every command validates its input,
//! mutates, recomputes both collections, and persists all three keys
//! before returning, so the externally observed order always matches a
//! full recompute-then-sort.
//!
//! All mutation goes through `&mut self`: operations never interleave
//! mid-computation on a single planner.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::collection::{days_until, PrioritizedCollection};
use crate::completion::CompletionLog;
use crate::error::{PlannerError, Result, ValidationError};
use crate::events::Event;
use crate::model::{DueSpec, Exam, ItemId, Subtask, Task};
use crate::scheduler::RecomputeScheduler;
use crate::storage::{KvStore, COMPLETED_KEY, EXAMS_KEY, TASKS_KEY};
use crate::urgency::Tier;

/// Render-facing view of a task: the stored fields plus the tier tag.
#[derive(Debug, Clone, Serialize)]
pub struct TaskView {
    pub id: ItemId,
    pub name: String,
    pub due_date: NaiveDate,
    pub weight: f64,
    pub days_left: i64,
    pub score: f64,
    pub tier: Tier,
    pub subtasks: Vec<Subtask>,
}

/// Render-facing view of an exam. `days_left` is derived at snapshot time.
#[derive(Debug, Clone, Serialize)]
pub struct ExamView {
    pub id: ItemId,
    pub name: String,
    pub date: NaiveDate,
    pub weight: f64,
    pub days_left: i64,
    pub score: f64,
    pub tier: Tier,
}

/// Everything a consumer needs after a recompute: both sorted sequences
/// with derived fields and tier tags attached, and the completion log.
#[derive(Debug, Clone, Serialize)]
pub struct PlannerSnapshot {
    pub tasks: Vec<TaskView>,
    pub exams: Vec<ExamView>,
    pub completed: Vec<String>,
}

/// The session state container.
pub struct Planner<S: KvStore> {
    tasks: PrioritizedCollection<Task>,
    exams: PrioritizedCollection<Exam>,
    completed: CompletionLog,
    scheduler: RecomputeScheduler,
    store: S,
    events: Vec<Event>,
}

impl<S: KvStore> Planner<S> {
    /// Open a session over `store` with the default recompute period.
    pub fn open(store: S, now: DateTime<Utc>) -> Result<Self> {
        Self::open_with_period(
            store,
            Duration::seconds(RecomputeScheduler::DEFAULT_PERIOD_SECS as i64),
            now,
        )
    }

    /// Open a session with an explicit recompute period.
    ///
    /// Loads all three keys (absent or malformed state loads as empty),
    /// re-derives every score, arms the scheduler, and persists the
    /// re-derived state.
    pub fn open_with_period(store: S, period: Duration, now: DateTime<Utc>) -> Result<Self> {
        let tasks = PrioritizedCollection::from_items(Self::load_key(&store, TASKS_KEY));
        let exams = PrioritizedCollection::from_items(Self::load_key(&store, EXAMS_KEY));
        let completed = CompletionLog::from_entries(Self::load_key(&store, COMPLETED_KEY));

        let mut scheduler = RecomputeScheduler::with_period(period);
        scheduler.start(now);

        let mut planner = Self {
            tasks,
            exams,
            completed,
            scheduler,
            store,
            events: Vec::new(),
        };
        planner.refresh(now)?;
        Ok(planner)
    }

    /// Fail-soft read of one persisted key: absent or unparsable state
    /// yields the empty collection, never an error.
    fn load_key<T: DeserializeOwned>(store: &S, key: &str) -> Vec<T> {
        match store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(key, error = %e, "malformed persisted state, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key, error = %e, "unreadable persisted state, starting empty");
                Vec::new()
            }
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Create a task due per `due`, returning its id.
    pub fn create_task(
        &mut self,
        name: &str,
        weight: f64,
        due: DueSpec,
        now: DateTime<Utc>,
    ) -> Result<ItemId> {
        let name = validated_name(name)?;
        let weight = validated_weight(weight)?;
        let task = Task::new(name.clone(), due.resolve(now.date_naive()), weight);
        let id = task.id;
        self.tasks.insert(task);
        self.events.push(Event::TaskCreated { id, name, at: now });
        self.refresh(now)?;
        Ok(id)
    }

    /// Create an exam on `date`, returning its id.
    pub fn create_exam(
        &mut self,
        name: &str,
        weight: f64,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<ItemId> {
        let name = validated_name(name)?;
        let weight = validated_weight(weight)?;
        let exam = Exam::new(name.clone(), date, weight);
        let id = exam.id;
        self.exams.insert(exam);
        self.events.push(Event::ExamCreated { id, name, at: now });
        self.refresh(now)?;
        Ok(id)
    }

    /// Rename a task or exam.
    pub fn rename(&mut self, id: ItemId, name: &str, now: DateTime<Utc>) -> Result<()> {
        let name = validated_name(name)?;
        if let Some(task) = self.tasks.get_mut(id) {
            task.name = name;
        } else if let Some(exam) = self.exams.get_mut(id) {
            exam.name = name;
        } else {
            return Err(PlannerError::UnknownId(id));
        }
        self.events.push(Event::ItemEdited { id, at: now });
        self.refresh(now)
    }

    /// Change the importance weight of a task or exam.
    pub fn set_weight(&mut self, id: ItemId, weight: f64, now: DateTime<Utc>) -> Result<()> {
        let weight = validated_weight(weight)?;
        if let Some(task) = self.tasks.get_mut(id) {
            task.weight = weight;
        } else if let Some(exam) = self.exams.get_mut(id) {
            exam.weight = weight;
        } else {
            return Err(PlannerError::UnknownId(id));
        }
        self.events.push(Event::ItemEdited { id, at: now });
        self.refresh(now)
    }

    /// Move the due date of a task or exam.
    pub fn set_due_date(&mut self, id: ItemId, date: NaiveDate, now: DateTime<Utc>) -> Result<()> {
        if let Some(task) = self.tasks.get_mut(id) {
            task.due_date = date;
        } else if let Some(exam) = self.exams.get_mut(id) {
            exam.date = date;
        } else {
            return Err(PlannerError::UnknownId(id));
        }
        self.events.push(Event::ItemEdited { id, at: now });
        self.refresh(now)
    }

    /// Append a subtask to a task's checklist.
    pub fn add_subtask(&mut self, id: ItemId, text: &str, now: DateTime<Utc>) -> Result<()> {
        let text = validated_name(text)?;
        let task = self.tasks.get_mut(id).ok_or(PlannerError::UnknownId(id))?;
        task.subtasks.push(Subtask::new(text));
        self.events.push(Event::SubtasksChanged { id, at: now });
        self.refresh(now)
    }

    /// Flip a subtask's done flag, returning the new state.
    pub fn toggle_subtask(&mut self, id: ItemId, index: usize, now: DateTime<Utc>) -> Result<bool> {
        let task = self.tasks.get_mut(id).ok_or(PlannerError::UnknownId(id))?;
        let len = task.subtasks.len();
        let sub = task
            .subtasks
            .get_mut(index)
            .ok_or(ValidationError::SubtaskIndexOutOfRange { index, len })?;
        sub.done = !sub.done;
        let done = sub.done;
        self.events.push(Event::SubtasksChanged { id, at: now });
        self.refresh(now)?;
        Ok(done)
    }

    /// Remove a subtask, returning it.
    pub fn remove_subtask(
        &mut self,
        id: ItemId,
        index: usize,
        now: DateTime<Utc>,
    ) -> Result<Subtask> {
        let task = self.tasks.get_mut(id).ok_or(PlannerError::UnknownId(id))?;
        let len = task.subtasks.len();
        if index >= len {
            return Err(ValidationError::SubtaskIndexOutOfRange { index, len }.into());
        }
        let removed = task.subtasks.remove(index);
        self.events.push(Event::SubtasksChanged { id, at: now });
        self.refresh(now)?;
        Ok(removed)
    }

    /// Complete an item: its name moves to the log, the record is
    /// discarded. There is no resurrection path.
    pub fn complete(&mut self, id: ItemId, now: DateTime<Utc>) -> Result<String> {
        let name = if let Some(task) = self.tasks.remove(id) {
            task.name
        } else if let Some(exam) = self.exams.remove(id) {
            exam.name
        } else {
            return Err(PlannerError::UnknownId(id));
        };
        self.completed.push(name.clone());
        self.events.push(Event::ItemCompleted {
            id,
            name: name.clone(),
            at: now,
        });
        self.refresh(now)?;
        Ok(name)
    }

    /// Delete an item without logging it.
    pub fn delete(&mut self, id: ItemId, now: DateTime<Utc>) -> Result<String> {
        let name = if let Some(task) = self.tasks.remove(id) {
            task.name
        } else if let Some(exam) = self.exams.remove(id) {
            exam.name
        } else {
            return Err(PlannerError::UnknownId(id));
        };
        self.events.push(Event::ItemDeleted {
            id,
            name: name.clone(),
            at: now,
        });
        self.refresh(now)?;
        Ok(name)
    }

    /// Drive the periodic recompute. Returns the recompute event when the
    /// scheduler period has elapsed, `None` otherwise.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Result<Option<Event>> {
        if !self.scheduler.tick(now) {
            return Ok(None);
        }
        self.refresh(now)?;
        let event = Event::Recomputed {
            tasks: self.tasks.len(),
            exams: self.exams.len(),
            at: now,
        };
        self.events.push(event.clone());
        Ok(Some(event))
    }

    /// Stop the periodic recompute at session teardown.
    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Recompute, then return the sorted views with tier tags attached.
    pub fn snapshot(&mut self, now: DateTime<Utc>) -> PlannerSnapshot {
        self.tasks.recompute_and_sort(now);
        self.exams.recompute_and_sort(now);

        let tasks = self
            .tasks
            .items()
            .iter()
            .map(|t| TaskView {
                id: t.id,
                name: t.name.clone(),
                due_date: t.due_date,
                weight: t.weight,
                days_left: t.days_left,
                score: t.score,
                tier: Tier::from_score(t.score),
                subtasks: t.subtasks.clone(),
            })
            .collect();

        let exams = self
            .exams
            .items()
            .iter()
            .map(|e| ExamView {
                id: e.id,
                name: e.name.clone(),
                date: e.date,
                weight: e.weight,
                days_left: days_until(e.date, now),
                score: e.score,
                tier: Tier::from_score(e.score),
            })
            .collect();

        PlannerSnapshot {
            tasks,
            exams,
            completed: self.completed.entries().to_vec(),
        }
    }

    /// Drain the events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.items()
    }

    pub fn exams(&self) -> &[Exam] {
        self.exams.items()
    }

    pub fn completed(&self) -> &CompletionLog {
        &self.completed
    }

    pub fn scheduler(&self) -> &RecomputeScheduler {
        &self.scheduler
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ── Internals ────────────────────────────────────────────────────

    /// Recompute and re-sort both collections, then persist all three
    /// keys. Runs after every mutation and every scheduler fire.
    fn refresh(&mut self, now: DateTime<Utc>) -> Result<()> {
        self.tasks.recompute_and_sort(now);
        self.exams.recompute_and_sort(now);
        tracing::debug!(
            tasks = self.tasks.len(),
            exams = self.exams.len(),
            "recomputed urgency ranking"
        );
        self.persist()
    }

    fn persist(&mut self) -> Result<()> {
        let tasks = serde_json::to_string(self.tasks.items())?;
        let exams = serde_json::to_string(self.exams.items())?;
        let completed = serde_json::to_string(&self.completed)?;
        self.store.set(TASKS_KEY, &tasks)?;
        self.store.set(EXAMS_KEY, &exams)?;
        self.store.set(COMPLETED_KEY, &completed)?;
        Ok(())
    }
}

fn validated_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}

fn validated_weight(weight: f64) -> Result<f64, ValidationError> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(ValidationError::invalid_weight(weight));
    }
    Ok(weight)
}
