//! Task management commands for CLI.

use chrono::Utc;
use clap::Subcommand;
use urgenda_core::DueSpec;

use crate::common;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Add {
        /// Task name
        name: String,
        /// Importance weight (> 0)
        #[arg(long, default_value = "1.0")]
        weight: f64,
        /// Days until due
        #[arg(long)]
        days: Option<u32>,
        /// Explicit due date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// List tasks ordered by urgency
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one task with its subtasks
    Get {
        /// Task id
        id: String,
    },
    /// Edit a task
    Edit {
        /// Task id
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New importance weight (> 0)
        #[arg(long)]
        weight: Option<f64>,
        /// New due date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Complete a task (moves its name to the done log)
    Complete {
        /// Task id
        id: String,
    },
    /// Delete a task without logging it
    Delete {
        /// Task id
        id: String,
    },
    /// Manage a task's subtask checklist
    Subtask {
        #[command(subcommand)]
        action: SubtaskAction,
    },
}

#[derive(Subcommand)]
pub enum SubtaskAction {
    /// Append a subtask
    Add {
        /// Task id
        task_id: String,
        /// Subtask text
        text: String,
    },
    /// Flip a subtask's done flag
    Toggle {
        /// Task id
        task_id: String,
        /// Zero-based subtask index
        index: usize,
    },
    /// Remove a subtask
    Remove {
        /// Task id
        task_id: String,
        /// Zero-based subtask index
        index: usize,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut planner = common::open_planner()?;
    let now = Utc::now();

    match action {
        TaskAction::Add {
            name,
            weight,
            days,
            date,
        } => {
            let due = match (days, date) {
                (Some(d), None) => DueSpec::InDays(d),
                (None, Some(raw)) => DueSpec::OnDate(common::parse_date(&raw)?),
                (Some(_), Some(_)) => return Err("pass either --days or --date, not both".into()),
                (None, None) => return Err("a due date is required: pass --days or --date".into()),
            };
            let id = planner.create_task(&name, weight, due, now)?;
            println!("Task created: {id}");
            let snap = planner.snapshot(now);
            if let Some(view) = snap.tasks.iter().find(|t| t.id == id) {
                println!("{}", serde_json::to_string_pretty(view)?);
            }
        }
        TaskAction::List { json } => {
            let snap = planner.snapshot(now);
            if json {
                println!("{}", serde_json::to_string_pretty(&snap.tasks)?);
            } else if snap.tasks.is_empty() {
                println!("No active tasks.");
            } else {
                for t in &snap.tasks {
                    println!(
                        "[{}] {}  due {} ({} days)  score {:.2}  id {}",
                        t.tier, t.name, t.due_date, t.days_left, t.score, t.id
                    );
                }
            }
        }
        TaskAction::Get { id } => {
            let id = common::parse_id(&id)?;
            let snap = planner.snapshot(now);
            let view = snap
                .tasks
                .iter()
                .find(|t| t.id == id)
                .ok_or_else(|| format!("no task with id {id}"))?;
            println!(
                "[{}] {}  due {} ({} days)  score {:.2}  weight {}",
                view.tier, view.name, view.due_date, view.days_left, view.score, view.weight
            );
            for (i, sub) in view.subtasks.iter().enumerate() {
                let mark = if sub.done { "x" } else { " " };
                println!("  {i}. [{mark}] {}", sub.text);
            }
        }
        TaskAction::Edit {
            id,
            name,
            weight,
            date,
        } => {
            let id = common::parse_id(&id)?;
            if let Some(name) = name {
                planner.rename(id, &name, now)?;
            }
            if let Some(weight) = weight {
                planner.set_weight(id, weight, now)?;
            }
            if let Some(raw) = date {
                planner.set_due_date(id, common::parse_date(&raw)?, now)?;
            }
            println!("Task updated: {id}");
        }
        TaskAction::Complete { id } => {
            let id = common::parse_id(&id)?;
            let name = planner.complete(id, now)?;
            println!("Completed: {name}");
        }
        TaskAction::Delete { id } => {
            let id = common::parse_id(&id)?;
            let name = planner.delete(id, now)?;
            println!("Deleted: {name}");
        }
        TaskAction::Subtask { action } => match action {
            SubtaskAction::Add { task_id, text } => {
                let id = common::parse_id(&task_id)?;
                planner.add_subtask(id, &text, now)?;
                println!("Subtask added to {id}");
            }
            SubtaskAction::Toggle { task_id, index } => {
                let id = common::parse_id(&task_id)?;
                let done = planner.toggle_subtask(id, index, now)?;
                println!("Subtask {index}: {}", if done { "done" } else { "open" });
            }
            SubtaskAction::Remove { task_id, index } => {
                let id = common::parse_id(&task_id)?;
                let removed = planner.remove_subtask(id, index, now)?;
                println!("Subtask removed: {}", removed.text);
            }
        },
    }
    Ok(())
}
