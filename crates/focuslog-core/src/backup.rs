//! JSON backup and restore.
//!
//! The backup document is `{ app, user, exportDate, data }` where `data` is
//! the history map. Only `data` matters for restore; the rest is metadata.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::history::History;

/// Value of the `app` field in backups written by this crate.
pub const APP_NAME: &str = "focuslog";

/// On-disk backup document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupPayload {
    #[serde(default)]
    pub app: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub export_date: String,
    pub data: History,
}

/// Wrap a history snapshot for export.
pub fn export(history: &History, user: &str, now: DateTime<Utc>) -> BackupPayload {
    BackupPayload {
        app: APP_NAME.to_string(),
        user: user.to_string(),
        export_date: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        data: history.clone(),
    }
}

impl BackupPayload {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate and extract the history.
    ///
    /// A payload naming a different `app` is refused. Empty entries are
    /// dropped rather than rejected.
    pub fn into_history(self) -> Result<History> {
        if !self.app.is_empty() && self.app != APP_NAME {
            return Err(ValidationError::UnsupportedPayload(format!(
                "written by '{}', expected '{APP_NAME}'",
                self.app
            ))
            .into());
        }
        let mut history = self.data;
        history.validate()?;
        let pruned = history.prune();
        if pruned > 0 {
            tracing::debug!(pruned, "dropped empty entries from backup");
        }
        Ok(history)
    }
}

/// Parse a backup document into a validated history.
pub fn import(json: &str) -> Result<History> {
    let payload: BackupPayload = serde_json::from_str(json)?;
    tracing::debug!(
        app = %payload.app,
        export_date = %payload.export_date,
        "importing backup"
    );
    payload.into_history()
}

/// Write a backup file.
pub fn write_backup(path: &Path, payload: &BackupPayload) -> Result<()> {
    std::fs::write(path, payload.to_json_pretty()?)?;
    Ok(())
}

/// Read and validate a backup file.
pub fn read_backup(path: &Path) -> Result<History> {
    let content = std::fs::read_to_string(path)?;
    import(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::history::LogEntry;
    use chrono::TimeZone;

    fn sample() -> History {
        let mut h = History::new();
        h.set_entry("2024-03-01", 9, LogEntry::rated(5, 4).completed());
        h.set_entry("2024-03-01", 14, LogEntry::default().with_activity("meetings"));
        h.set_entry("2024-03-02", 8, LogEntry::rated(2, 3));
        h
    }

    #[test]
    fn export_document_shape() {
        let now = Utc.with_ymd_and_hms(2024, 3, 3, 12, 0, 0).unwrap();
        let json = export(&sample(), "sam@example.com", now).to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["app"], "focuslog");
        assert_eq!(value["user"], "sam@example.com");
        assert_eq!(value["exportDate"], "2024-03-03T12:00:00Z");
        assert_eq!(value["data"]["2024-03-01"]["9"]["energy"], 4);
    }

    #[test]
    fn import_of_export_is_identity() {
        let history = sample();
        let json = export(&history, "", Utc::now()).to_json_pretty().unwrap();
        assert_eq!(import(&json).unwrap(), history);
    }

    #[test]
    fn import_ignores_metadata() {
        let json = r#"{"data": {"2024-03-01": {"9": {"focus": 3, "energy": 3}}}}"#;
        let history = import(json).unwrap();
        assert_eq!(history.entry("2024-03-01", 9), Some(&LogEntry::rated(3, 3)));
    }

    #[test]
    fn import_rejects_foreign_app() {
        let json = r#"{"app": "other", "data": {}}"#;
        let err = import(json).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::UnsupportedPayload(_))
        ));
    }

    #[test]
    fn import_rejects_malformed_data() {
        assert!(import(r#"{"app": "focuslog"}"#).is_err());
        assert!(import(r#"{"data": {"2024-03-01": {"9": {"focus": "high"}}}}"#).is_err());
        assert!(import(r#"{"data": {"2024-03-01": {"nine": {"focus": 3}}}}"#).is_err());
        assert!(import(r#"{"data": {"March 1": {"9": {"focus": 3}}}}"#).is_err());
        assert!(import(r#"{"data": {"2024-03-01": {"25": {"focus": 3}}}}"#).is_err());
        assert!(import(r#"{"data": {"2024-03-01": {"9": {"energy": 7}}}}"#).is_err());
    }

    #[test]
    fn import_prunes_empty_entries() {
        let json = r#"{"app": "focuslog", "data": {"2024-03-01": {"9": {"completed": false}}}}"#;
        assert!(import(json).unwrap().is_empty());
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backup.json");
        let history = sample();
        write_backup(&path, &export(&history, "sam", Utc::now())).unwrap();
        assert_eq!(read_backup(&path).unwrap(), history);
    }
}
