//! Ranked item collections.
//!
//! A [`PrioritizedCollection`] holds active items of one kind and keeps
//! them ordered by urgency score, highest first. Sorting always happens
//! through [`PrioritizedCollection::recompute_and_sort`], so the observed
//! order reflects the wall clock at the last recompute, never the scores
//! frozen at insertion.

use chrono::{DateTime, NaiveTime, Utc};

use crate::model::{Exam, ItemId, Task};
use crate::urgency::urgency_score;

/// Whole days until `due`, measured from `now` against UTC midnight of the
/// due date. Partial days round up: due 0.3 days out reports 1 day left.
/// Negative means overdue.
pub fn days_until(due: chrono::NaiveDate, now: DateTime<Utc>) -> i64 {
    let due_midnight = due.and_time(NaiveTime::MIN).and_utc();
    let secs = (due_midnight - now).num_seconds();
    (secs as f64 / 86_400.0).ceil() as i64
}

/// Seam between the ranked container and the item kinds it holds.
pub trait Urgent {
    /// Whether the exam multiplier applies to this kind.
    const IS_EXAM: bool;

    fn id(&self) -> ItemId;
    fn name(&self) -> &str;
    fn due_date(&self) -> chrono::NaiveDate;
    fn weight(&self) -> f64;
    fn score(&self) -> f64;
    /// Write back the freshly derived fields after a recompute.
    fn apply_derived(&mut self, days_left: i64, score: f64);
}

impl Urgent for Task {
    const IS_EXAM: bool = false;

    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn due_date(&self) -> chrono::NaiveDate {
        self.due_date
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn apply_derived(&mut self, days_left: i64, score: f64) {
        self.days_left = days_left;
        self.score = score;
    }
}

impl Urgent for Exam {
    const IS_EXAM: bool = true;

    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn due_date(&self) -> chrono::NaiveDate {
        self.date
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn apply_derived(&mut self, _days_left: i64, score: f64) {
        self.score = score;
    }
}

/// Mutable ordered sequence of one item kind, sorted by score descending.
#[derive(Debug, Clone)]
pub struct PrioritizedCollection<T> {
    items: Vec<T>,
}

impl<T> Default for PrioritizedCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Urgent> PrioritizedCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Append an item. Order is reconciled at the next recompute, which the
    /// owning planner performs before any read.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    /// Recompute `days_left`/`score` for every item, then re-sort by score
    /// descending. `Vec::sort_by` is stable, so equal scores keep their
    /// prior relative order, and `total_cmp` gives a total order for any
    /// `f64`.
    pub fn recompute_and_sort(&mut self, now: DateTime<Utc>) {
        for item in &mut self.items {
            let days = days_until(item.due_date(), now);
            let score = urgency_score(days as f64, item.weight(), T::IS_EXAM);
            item.apply_derived(days, score);
        }
        self.items.sort_by(|a, b| b.score().total_cmp(&a.score()));
    }

    /// Remove and return the item with the given id, or `None` if no item
    /// has it (e.g. a reference gone stale through completion elsewhere).
    pub fn remove(&mut self, id: ItemId) -> Option<T> {
        let pos = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(pos))
    }

    pub fn get(&self, id: ItemId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Read-only ordered view.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn at(s: &str) -> DateTime<Utc> {
        format!("{s}Z").parse().unwrap()
    }

    #[test]
    fn days_until_rounds_partial_days_up() {
        // 0.3 days before midnight of the due date.
        let now = at("2026-08-09T16:48:00");
        assert_eq!(days_until(date("2026-08-10"), now), 1);
        // Exactly at midnight of the due date.
        assert_eq!(days_until(date("2026-08-10"), at("2026-08-10T00:00:00")), 0);
        // Half a day past due rounds toward zero, a full day past is -1.
        assert_eq!(days_until(date("2026-08-10"), at("2026-08-10T12:00:00")), 0);
        assert_eq!(days_until(date("2026-08-10"), at("2026-08-11T00:00:00")), -1);
        assert_eq!(days_until(date("2026-08-17"), at("2026-08-10T00:00:00")), 7);
    }

    #[test]
    fn recompute_orders_by_score_descending() {
        let now = at("2026-08-10T08:00:00");
        let mut tasks = PrioritizedCollection::new();
        tasks.insert(Task::new("far", date("2026-09-09"), 1.0));
        tasks.insert(Task::new("near", date("2026-08-11"), 1.0));
        tasks.insert(Task::new("heavy", date("2026-08-11"), 9.0));

        tasks.recompute_and_sort(now);

        let names: Vec<_> = tasks.items().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["heavy", "near", "far"]);
        assert!(tasks.items()[0].score > tasks.items()[1].score);
        assert_eq!(tasks.items()[1].days_left, 1);
    }

    #[test]
    fn sort_is_stable_for_equal_scores() {
        let now = at("2026-08-10T08:00:00");
        let mut tasks = PrioritizedCollection::new();
        // Identical date and weight give bit-identical scores.
        tasks.insert(Task::new("first", date("2026-08-15"), 2.0));
        tasks.insert(Task::new("second", date("2026-08-15"), 2.0));
        tasks.insert(Task::new("third", date("2026-08-15"), 2.0));

        for _ in 0..5 {
            tasks.recompute_and_sort(now);
        }

        let names: Vec<_> = tasks.items().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn exam_collection_applies_multiplier() {
        let now = at("2026-08-10T08:00:00");
        let mut tasks = PrioritizedCollection::new();
        let mut exams = PrioritizedCollection::new();
        tasks.insert(Task::new("t", date("2026-08-13"), 2.0));
        exams.insert(Exam::new("e", date("2026-08-13"), 2.0));

        tasks.recompute_and_sort(now);
        exams.recompute_and_sort(now);

        let task_score = tasks.items()[0].score;
        let exam_score = exams.items()[0].score;
        assert!((exam_score - task_score * 1.5).abs() < 1e-9);
    }

    #[test]
    fn remove_by_id_leaves_others_untouched() {
        let now = at("2026-08-10T08:00:00");
        let mut tasks = PrioritizedCollection::new();
        tasks.insert(Task::new("a", date("2026-08-12"), 1.0));
        tasks.insert(Task::new("b", date("2026-08-20"), 1.0));
        tasks.recompute_and_sort(now);

        let b_id = tasks.items()[1].id;
        let removed = tasks.remove(b_id).unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks.items()[0].name, "a");

        // The id stays stale forever.
        assert!(tasks.remove(b_id).is_none());
    }

    #[test]
    fn overdue_items_rank_highest_for_their_weight() {
        let now = at("2026-08-10T08:00:00");
        let mut tasks = PrioritizedCollection::new();
        tasks.insert(Task::new("due-today", date("2026-08-10"), 1.0));
        tasks.insert(Task::new("overdue", date("2026-08-01"), 1.0));
        tasks.recompute_and_sort(now);

        let overdue = tasks.items().iter().find(|t| t.name == "overdue").unwrap();
        let today = tasks.items().iter().find(|t| t.name == "due-today").unwrap();
        assert!(overdue.days_left < 0);
        assert_eq!(overdue.score, today.score);
        assert!(overdue.score.is_finite());
    }
}
