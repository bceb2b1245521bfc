//! SQLite-backed history store.
//!
//! One row per logged hour, keyed by `(date, hour)`. Writing an empty entry
//! deletes its row, so the table never holds default-only entries.

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection};

use super::{data_dir, HistoryStore};
use crate::error::{DatabaseError, Result};
use crate::history::{validate_slot, History, LogEntry};

/// SQLite database holding the hourly log.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `<data_dir>/focuslog.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        Self::open_at(&data_dir()?.join("focuslog.db"))
    }

    /// Open (or create) a database file at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "opened history database");
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS entries (
                date        TEXT NOT NULL,
                hour        INTEGER NOT NULL,
                activity    TEXT,
                focus       INTEGER,
                energy      INTEGER,
                completed   INTEGER NOT NULL DEFAULT 0,
                updated_at  TEXT NOT NULL,
                PRIMARY KEY (date, hour)
            );

            CREATE INDEX IF NOT EXISTS idx_entries_hour ON entries(hour);",
        )?;
        Ok(())
    }

    /// Number of stored entries.
    pub fn entry_count(&self) -> Result<u64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get::<_, u64>(0))?;
        Ok(count)
    }

    fn write_entry(conn: &Connection, date: &str, hour: u8, entry: &LogEntry) -> Result<()> {
        if entry.is_empty() {
            conn.execute(
                "DELETE FROM entries WHERE date = ?1 AND hour = ?2",
                params![date, hour],
            )?;
            tracing::debug!(date, hour, "pruned empty entry");
            return Ok(());
        }
        conn.execute(
            "INSERT OR REPLACE INTO entries (date, hour, activity, focus, energy, completed, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                date,
                hour,
                entry.activity.as_deref().filter(|a| !a.is_empty()),
                entry.focus,
                entry.energy,
                entry.completed,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }
}

impl HistoryStore for Database {
    fn load(&self) -> Result<History> {
        let mut stmt = self.conn.prepare(
            "SELECT date, hour, activity, focus, energy, completed
             FROM entries
             ORDER BY date, hour",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, u8>(1)?,
                LogEntry {
                    activity: row.get(2)?,
                    focus: row.get(3)?,
                    energy: row.get(4)?,
                    completed: row.get(5)?,
                },
            ))
        })?;

        let mut history = History::new();
        for row in rows {
            let (date, hour, entry) = row?;
            history.set_entry(&date, hour, entry);
        }
        Ok(history)
    }

    fn upsert(&mut self, date: &str, hour: u8, entry: &LogEntry) -> Result<()> {
        validate_slot(date, hour, entry)?;
        Self::write_entry(&self.conn, date, hour, entry)?;
        tracing::debug!(date, hour, "stored entry");
        Ok(())
    }

    fn clear(&mut self, date: &str, hour: u8) -> Result<bool> {
        let removed = self.conn.execute(
            "DELETE FROM entries WHERE date = ?1 AND hour = ?2",
            params![date, hour],
        )?;
        Ok(removed > 0)
    }

    fn replace_all(&mut self, history: &History) -> Result<()> {
        history.validate()?;
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM entries", [])?;
        for (date, hour, entry) in history.entries() {
            Self::write_entry(&tx, date, hour, entry)?;
        }
        tx.commit()?;
        tracing::debug!(entries = history.entry_count(), "replaced history");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_and_load() {
        let mut db = Database::open_memory().unwrap();
        db.upsert("2024-03-01", 9, &LogEntry::rated(4, 3).with_activity("writing"))
            .unwrap();
        db.upsert("2024-03-01", 10, &LogEntry::rated(2, 2).completed())
            .unwrap();

        let history = db.load().unwrap();
        assert_eq!(history.entry_count(), 2);
        let nine = history.entry("2024-03-01", 9).unwrap();
        assert_eq!(nine.activity.as_deref(), Some("writing"));
        assert!(history.entry("2024-03-01", 10).unwrap().completed);
    }

    #[test]
    fn upsert_overwrites_slot() {
        let mut db = Database::open_memory().unwrap();
        db.upsert("2024-03-01", 9, &LogEntry::rated(1, 1)).unwrap();
        db.upsert("2024-03-01", 9, &LogEntry::rated(5, 5)).unwrap();
        assert_eq!(db.entry_count().unwrap(), 1);
        assert_eq!(db.load().unwrap().entry("2024-03-01", 9).unwrap().focus, Some(5));
    }

    #[test]
    fn empty_entry_deletes_row() {
        let mut db = Database::open_memory().unwrap();
        db.upsert("2024-03-01", 9, &LogEntry::rated(4, 3)).unwrap();
        db.upsert("2024-03-01", 9, &LogEntry::default()).unwrap();
        assert_eq!(db.entry_count().unwrap(), 0);
        assert!(db.load().unwrap().is_empty());
    }

    #[test]
    fn rejects_invalid_slots() {
        let mut db = Database::open_memory().unwrap();
        assert!(db.upsert("03/01/2024", 9, &LogEntry::rated(3, 3)).is_err());
        assert!(db.upsert("2024-03-01", 24, &LogEntry::rated(3, 3)).is_err());
        assert!(db.upsert("2024-03-01", 9, &LogEntry::rated(9, 3)).is_err());
        assert_eq!(db.entry_count().unwrap(), 0);
    }

    #[test]
    fn clear_reports_whether_row_existed() {
        let mut db = Database::open_memory().unwrap();
        db.upsert("2024-03-01", 9, &LogEntry::rated(4, 3)).unwrap();
        assert!(db.clear("2024-03-01", 9).unwrap());
        assert!(!db.clear("2024-03-01", 9).unwrap());
    }

    #[test]
    fn replace_all_swaps_contents() {
        let mut db = Database::open_memory().unwrap();
        db.upsert("2024-03-01", 9, &LogEntry::rated(4, 3)).unwrap();

        let mut incoming = History::new();
        incoming.set_entry("2024-04-02", 14, LogEntry::rated(2, 5));
        incoming.set_entry("2024-04-02", 15, LogEntry::default().with_activity("review"));
        db.replace_all(&incoming).unwrap();

        assert_eq!(db.load().unwrap(), incoming);
    }

    #[test]
    fn restored_backup_reloads_unchanged() {
        let json = r#"{"data": {"2024-03-01": {"9": {"activity": "", "focus": 3, "energy": 3}, "10": {"activity": "", "completed": true}}}}"#;
        let imported = crate::backup::import(json).unwrap();

        let mut db = Database::open_memory().unwrap();
        db.replace_all(&imported).unwrap();
        let reloaded = db.load().unwrap();

        assert_eq!(reloaded, imported);
        assert_eq!(reloaded.entry("2024-03-01", 9).unwrap().activity, None);
    }
}
