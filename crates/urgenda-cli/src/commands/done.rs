//! Completed item log commands for CLI.

use chrono::Utc;
use clap::Subcommand;

use crate::common;

#[derive(Subcommand)]
pub enum DoneAction {
    /// List completed item names, oldest first
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: DoneAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut planner = common::open_planner()?;

    match action {
        DoneAction::List { json } => {
            let snap = planner.snapshot(Utc::now());
            if json {
                println!("{}", serde_json::to_string_pretty(&snap.completed)?);
            } else if snap.completed.is_empty() {
                println!("Nothing completed yet.");
            } else {
                for name in &snap.completed {
                    println!("{name}");
                }
            }
        }
    }
    Ok(())
}
