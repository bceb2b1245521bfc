mod config;
pub mod database;

pub use config::Config;
pub use database::Database;

use std::path::PathBuf;

use crate::error::Result;
use crate::history::{validate_slot, History, LogEntry};

/// Persistence behind the hourly log.
///
/// The prediction engine never talks to a store; callers `load()` a
/// snapshot and hand it to the engine.
pub trait HistoryStore {
    /// Read the full history.
    fn load(&self) -> Result<History>;

    /// Write one hour's entry. An empty entry removes the hour.
    fn upsert(&mut self, date: &str, hour: u8, entry: &LogEntry) -> Result<()>;

    /// Remove one hour's entry. Returns whether anything was removed.
    fn clear(&mut self, date: &str, hour: u8) -> Result<bool>;

    /// Replace everything with `history` (used by backup restore).
    fn replace_all(&mut self, history: &History) -> Result<()>;
}

/// An in-memory history is its own store.
impl HistoryStore for History {
    fn load(&self) -> Result<History> {
        Ok(self.clone())
    }

    fn upsert(&mut self, date: &str, hour: u8, entry: &LogEntry) -> Result<()> {
        validate_slot(date, hour, entry)?;
        self.set_entry(date, hour, entry.clone());
        Ok(())
    }

    fn clear(&mut self, date: &str, hour: u8) -> Result<bool> {
        Ok(self.clear_entry(date, hour).is_some())
    }

    fn replace_all(&mut self, history: &History) -> Result<()> {
        history.validate()?;
        *self = history.clone();
        self.prune();
        Ok(())
    }
}

/// Returns `~/.config/focuslog[-dev]/` based on FOCUSLOG_ENV.
///
/// Set FOCUSLOG_ENV=dev to use the development data directory, or
/// FOCUSLOG_DATA_DIR to point somewhere else entirely.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("FOCUSLOG_DATA_DIR") {
        Some(custom) => PathBuf::from(custom),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("FOCUSLOG_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("focuslog-dev")
            } else {
                base_dir.join("focuslog")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
