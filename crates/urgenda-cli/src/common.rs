//! Shared helpers for CLI commands.

use chrono::{NaiveDate, Utc};
use urgenda_core::{Config, ItemId, Planner, SqliteStore};

/// Open the default planner session: SQLite store in the data directory,
/// recompute period from the config file.
pub fn open_planner() -> Result<Planner<SqliteStore>, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let store = SqliteStore::open()?;
    let planner = Planner::open_with_period(
        store,
        chrono::Duration::seconds(config.recompute_secs.max(1) as i64),
        Utc::now(),
    )?;
    Ok(planner)
}

pub fn parse_id(raw: &str) -> Result<ItemId, Box<dyn std::error::Error>> {
    raw.parse()
        .map_err(|_| format!("invalid item id: {raw}").into())
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{raw}', expected YYYY-MM-DD").into())
}
