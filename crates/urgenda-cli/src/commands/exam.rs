//! Exam management commands for CLI.

use chrono::Utc;
use clap::Subcommand;

use crate::common;

#[derive(Subcommand)]
pub enum ExamAction {
    /// Create a new exam
    Add {
        /// Exam name
        name: String,
        /// Importance weight (> 0)
        #[arg(long, default_value = "1.0")]
        weight: f64,
        /// Exam date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// List exams ordered by urgency
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit an exam
    Edit {
        /// Exam id
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New importance weight (> 0)
        #[arg(long)]
        weight: Option<f64>,
        /// New exam date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Complete an exam (moves its name to the done log)
    Complete {
        /// Exam id
        id: String,
    },
    /// Delete an exam without logging it
    Delete {
        /// Exam id
        id: String,
    },
}

pub fn run(action: ExamAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut planner = common::open_planner()?;
    let now = Utc::now();

    match action {
        ExamAction::Add { name, weight, date } => {
            let date = common::parse_date(&date)?;
            let id = planner.create_exam(&name, weight, date, now)?;
            println!("Exam created: {id}");
            let snap = planner.snapshot(now);
            if let Some(view) = snap.exams.iter().find(|e| e.id == id) {
                println!("{}", serde_json::to_string_pretty(view)?);
            }
        }
        ExamAction::List { json } => {
            let snap = planner.snapshot(now);
            if json {
                println!("{}", serde_json::to_string_pretty(&snap.exams)?);
            } else if snap.exams.is_empty() {
                println!("No active exams.");
            } else {
                for e in &snap.exams {
                    println!(
                        "[{}] {}  on {} ({} days)  score {:.2}  id {}",
                        e.tier, e.name, e.date, e.days_left, e.score, e.id
                    );
                }
            }
        }
        ExamAction::Edit {
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
            println!("Exam updated: {id}");
        }
        ExamAction::Complete { id } => {
            let id = common::parse_id(&id)?;
            let name = planner.complete(id, now)?;
            println!("Completed: {name}");
        }
        ExamAction::Delete { id } => {
            let id = common::parse_id(&id)?;
            let name = planner.delete(id, now)?;
            println!("Deleted: {name}");
        }
    }
    Ok(())
}
