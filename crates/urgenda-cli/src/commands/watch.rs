//! Periodic recompute loop.
//!
//! Drives `Planner::tick` from a 1 Hz polling loop; the scheduler decides
//! when a full recompute actually happens. Runs until interrupted.

use chrono::Utc;
use clap::Args;
use std::time::Duration;
use urgenda_core::{Config, Event, Planner, SqliteStore};

#[derive(Args)]
pub struct WatchArgs {
    /// Override the recompute period in seconds
    #[arg(long)]
    period: Option<u64>,
}

pub fn run(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let period_secs = args.period.unwrap_or(config.recompute_secs).max(1);

    let store = SqliteStore::open()?;
    let mut planner = Planner::open_with_period(
        store,
        chrono::Duration::seconds(period_secs as i64),
        Utc::now(),
    )?;
    planner.drain_events();

    println!("watching: recompute every {period_secs}s (ctrl-c to stop)");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        loop {
            interval.tick().await;
            match planner.tick(Utc::now()) {
                Ok(Some(Event::Recomputed { tasks, exams, at })) => {
                    println!("{} recomputed: {tasks} tasks, {exams} exams", at.format("%H:%M:%S"));
                    let snap = planner.snapshot(Utc::now());
                    for t in snap.tasks.iter().take(5) {
                        println!("  [{}] {} ({} days, score {:.2})", t.tier, t.name, t.days_left, t.score);
                    }
                    for e in snap.exams.iter().take(5) {
                        println!("  [{}] {} ({} days, score {:.2})", e.tier, e.name, e.days_left, e.score);
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    eprintln!("error: {e}");
                    break;
                }
            }
        }
    });

    planner.stop();
    Ok(())
}
