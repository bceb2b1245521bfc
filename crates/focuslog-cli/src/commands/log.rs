//! Hourly entry commands.

use clap::Subcommand;
use focuslog_core::{Config, Database, HistoryStore};

use super::{parse_hour, parse_level, resolve_date_key};

#[derive(Subcommand)]
pub enum LogAction {
    /// Record or update one hour. Only the given fields change.
    Set {
        /// Hour of day (0-23)
        #[arg(value_parser = parse_hour)]
        hour: u8,
        /// Date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
        /// Focus level (1-5)
        #[arg(long, value_parser = parse_level)]
        focus: Option<u8>,
        /// Energy level (1-5)
        #[arg(long, value_parser = parse_level)]
        energy: Option<u8>,
        /// What you were doing
        #[arg(long)]
        activity: Option<String>,
        /// Mark the hour's work as done
        #[arg(long)]
        completed: bool,
        /// Mark the hour's work as not done
        #[arg(long, conflicts_with = "completed")]
        not_completed: bool,
    },
    /// Remove one hour's entry
    Clear {
        /// Hour of day (0-23)
        #[arg(value_parser = parse_hour)]
        hour: u8,
        /// Date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show a day's entries
    Show {
        /// Date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: LogAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut db = Database::open()?;

    match action {
        LogAction::Set {
            hour,
            date,
            focus,
            energy,
            activity,
            completed,
            not_completed,
        } => {
            let date = resolve_date_key(date.as_deref())?;
            let tracked = Config::load()?.tracked_hours()?;
            if !tracked.contains(hour) {
                tracing::warn!(
                    hour,
                    start = tracked.start(),
                    end = tracked.end(),
                    "hour is outside the tracked range"
                );
            }

            let mut entry = db
                .load()?
                .entry(&date, hour)
                .cloned()
                .unwrap_or_default();
            if focus.is_some() {
                entry.focus = focus;
            }
            if energy.is_some() {
                entry.energy = energy;
            }
            if let Some(activity) = activity {
                entry.activity = Some(activity).filter(|a| !a.is_empty());
            }
            if completed {
                entry.completed = true;
            } else if not_completed {
                entry.completed = false;
            }

            db.upsert(&date, hour, &entry)?;
            if entry.is_empty() {
                println!("{date} {hour:02}:00 cleared (no fields left)");
            } else {
                println!("{date} {hour:02}:00 saved");
            }
        }
        LogAction::Clear { hour, date } => {
            let date = resolve_date_key(date.as_deref())?;
            if db.clear(&date, hour)? {
                println!("{date} {hour:02}:00 cleared");
            } else {
                println!("{date} {hour:02}:00 had no entry");
            }
        }
        LogAction::Show { date, json } => {
            let date = resolve_date_key(date.as_deref())?;
            let history = db.load()?;
            let day = history.day(&date).cloned().unwrap_or_default();

            if json {
                println!("{}", serde_json::to_string_pretty(&day)?);
                return Ok(());
            }

            println!("\n{date}");
            println!("{}", "─".repeat(50));
            if day.is_empty() {
                println!("  nothing logged");
            }
            for (hour, entry) in day.iter() {
                let level = |v: Option<u8>| v.map_or("-".to_string(), |v| v.to_string());
                println!(
                    "{:02}:00  focus {}  energy {}  {}  {}",
                    hour,
                    level(entry.focus),
                    level(entry.energy),
                    if entry.completed { "✓" } else { " " },
                    entry.activity.as_deref().unwrap_or("")
                );
            }
        }
    }
    Ok(())
}
