//! Hourly log entries and the per-day / per-history maps that hold them.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Highest focus/energy level a user can report.
pub const MAX_LEVEL: u8 = 5;

/// Format used for history date keys.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One hour's self-report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// What the user was doing (free text)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    /// Focus level (1-5)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<u8>,
    /// Energy level (1-5)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<u8>,
    /// Whether the planned work for this hour got done
    #[serde(default)]
    pub completed: bool,
}

impl LogEntry {
    /// Entry carrying focus and energy only.
    pub fn rated(focus: u8, energy: u8) -> Self {
        Self {
            focus: Some(focus),
            energy: Some(energy),
            ..Self::default()
        }
    }

    /// Builder-style completed flag.
    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }

    /// Builder-style activity text.
    pub fn with_activity(mut self, activity: impl Into<String>) -> Self {
        self.activity = Some(activity.into());
        self
    }

    /// True when nothing was recorded. Such entries are never stored.
    ///
    /// Zero levels count as absent here too.
    pub fn is_empty(&self) -> bool {
        self.activity.as_deref().map_or(true, str::is_empty)
            && self.focus.filter(|v| *v != 0).is_none()
            && self.energy.filter(|v| *v != 0).is_none()
            && !self.completed
    }

    /// Store an empty activity as absent.
    fn normalize(&mut self) {
        if self.activity.as_deref() == Some("") {
            self.activity = None;
        }
    }

    /// Focus and energy when both are present and nonzero.
    ///
    /// A zero level counts as "not recorded", same as an absent one.
    pub fn levels(&self) -> Option<(u8, u8)> {
        match (self.focus, self.energy) {
            (Some(f), Some(e)) if f != 0 && e != 0 => Some((f, e)),
            _ => None,
        }
    }

    /// Whether this entry can feed the predictors.
    pub fn qualifying(&self) -> bool {
        self.levels().is_some()
    }

    /// `(focus + energy) / 10` for a qualifying entry.
    pub fn score(&self) -> Option<f64> {
        self.levels().map(|(f, e)| (f64::from(f) + f64::from(e)) / 10.0)
    }

    /// Check level domains. Zero is tolerated and treated as unset.
    pub fn validate(&self, date: &str, hour: u8) -> Result<(), ValidationError> {
        for (field, value) in [("focus", self.focus), ("energy", self.energy)] {
            if let Some(v) = value {
                if v > MAX_LEVEL {
                    return Err(ValidationError::LevelOutOfRange {
                        field,
                        date: date.to_string(),
                        hour,
                        value: v,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Entries of a single day keyed by hour. Iterates hour-ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayLog(BTreeMap<u8, LogEntry>);

impl DayLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, hour: u8) -> Option<&LogEntry> {
        self.0.get(&hour)
    }

    /// Insert an entry, or drop the hour when the entry is empty.
    pub fn set(&mut self, hour: u8, mut entry: LogEntry) {
        entry.normalize();
        if entry.is_empty() {
            self.0.remove(&hour);
        } else {
            self.0.insert(hour, entry);
        }
    }

    pub fn remove(&mut self, hour: u8) -> Option<LogEntry> {
        self.0.remove(&hour)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (u8, &LogEntry)> {
        self.0.iter().map(|(h, e)| (*h, e))
    }

    /// Qualifying entries with their levels, hour-ascending.
    pub fn qualifying(&self) -> impl Iterator<Item = (u8, u8, u8, &LogEntry)> {
        self.iter()
            .filter_map(|(h, e)| e.levels().map(|(f, en)| (h, f, en, e)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn retain_non_empty(&mut self) {
        self.0.retain(|_, e| {
            e.normalize();
            !e.is_empty()
        });
    }
}

impl FromIterator<(u8, LogEntry)> for DayLog {
    fn from_iter<I: IntoIterator<Item = (u8, LogEntry)>>(iter: I) -> Self {
        let mut day = DayLog::new();
        for (hour, entry) in iter {
            day.set(hour, entry);
        }
        day
    }
}

/// All logged days keyed by ISO date (`YYYY-MM-DD`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History(BTreeMap<String, DayLog>);

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn day(&self, date: &str) -> Option<&DayLog> {
        self.0.get(date)
    }

    pub fn day_on(&self, date: NaiveDate) -> Option<&DayLog> {
        self.day(&date_key(date))
    }

    pub fn entry(&self, date: &str, hour: u8) -> Option<&LogEntry> {
        self.day(date).and_then(|d| d.get(hour))
    }

    /// Store an entry. Empty entries remove the slot, and a day left with
    /// no entries is removed as well.
    pub fn set_entry(&mut self, date: &str, hour: u8, entry: LogEntry) {
        if entry.is_empty() {
            self.clear_entry(date, hour);
            return;
        }
        self.0.entry(date.to_string()).or_default().set(hour, entry);
    }

    pub fn clear_entry(&mut self, date: &str, hour: u8) -> Option<LogEntry> {
        let day = self.0.get_mut(date)?;
        let removed = day.remove(hour);
        if day.is_empty() {
            self.0.remove(date);
        }
        removed
    }

    pub fn days(&self) -> impl Iterator<Item = (&str, &DayLog)> {
        self.0.iter().map(|(d, l)| (d.as_str(), l))
    }

    /// Every entry as `(date, hour, entry)`, date then hour ascending.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u8, &LogEntry)> {
        self.days()
            .flat_map(|(date, day)| day.iter().map(move |(h, e)| (date, h, e)))
    }

    pub fn entry_count(&self) -> usize {
        self.0.values().map(DayLog::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Validate every key and level.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (date, day) in self.days() {
            parse_date(date)?;
            for (hour, entry) in day.iter() {
                validate_slot(date, hour, entry)?;
            }
        }
        Ok(())
    }

    /// Drop empty entries and the days they leave behind. Empty activity
    /// strings on kept entries become `None`.
    pub fn prune(&mut self) -> usize {
        let before = self.entry_count();
        for day in self.0.values_mut() {
            day.retain_non_empty();
        }
        self.0.retain(|_, d| !d.is_empty());
        before - self.entry_count()
    }
}

/// Validate a single `(date, hour, entry)` slot before writing it.
pub fn validate_slot(date: &str, hour: u8, entry: &LogEntry) -> Result<(), ValidationError> {
    parse_date(date)?;
    if hour > 23 {
        return Err(ValidationError::HourOutOfRange(u32::from(hour)));
    }
    entry.validate(date, hour)
}

/// History key for a calendar date.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a history key back into a date.
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_entry_detection() {
        assert!(LogEntry::default().is_empty());
        assert!(LogEntry::default().with_activity("").is_empty());
        assert!(!LogEntry::default().with_activity("email").is_empty());
        assert!(!LogEntry::default().completed().is_empty());
        assert!(!LogEntry::rated(3, 3).is_empty());
    }

    #[test]
    fn zero_only_entries_are_empty() {
        let zero_focus = LogEntry {
            focus: Some(0),
            ..LogEntry::default()
        };
        assert!(zero_focus.is_empty());
        assert!(LogEntry::rated(0, 0).is_empty());
        assert!(!LogEntry::rated(0, 0).completed().is_empty());

        let mut history = History::new();
        history.set_entry("2024-03-01", 9, zero_focus);
        assert_eq!(history.entry_count(), 0);
    }

    #[test]
    fn empty_activity_is_stored_as_none() {
        let mut history = History::new();
        history.set_entry("2024-03-01", 9, LogEntry::rated(3, 3).with_activity(""));
        assert_eq!(history.entry("2024-03-01", 9), Some(&LogEntry::rated(3, 3)));

        let raw = r#"{"2024-03-01": {"9": {"activity": "", "focus": 3, "energy": 3}}}"#;
        let mut history: History = serde_json::from_str(raw).unwrap();
        assert_eq!(history.prune(), 0);
        assert_eq!(history.entry("2024-03-01", 9), Some(&LogEntry::rated(3, 3)));
    }

    #[test]
    fn zero_levels_do_not_qualify() {
        assert!(LogEntry::rated(4, 2).qualifying());
        assert!(!LogEntry::rated(0, 3).qualifying());
        assert!(!LogEntry::rated(3, 0).qualifying());
        let half = LogEntry {
            focus: Some(4),
            ..LogEntry::default()
        };
        assert!(!half.qualifying());
        assert_eq!(LogEntry::rated(5, 4).score(), Some(0.9));
    }

    #[test]
    fn set_entry_prunes_empty_entries_and_days() {
        let mut history = History::new();
        history.set_entry("2024-03-01", 9, LogEntry::rated(3, 4));
        assert_eq!(history.entry_count(), 1);

        history.set_entry("2024-03-01", 9, LogEntry::default());
        assert!(history.is_empty());
        assert!(history.day("2024-03-01").is_none());
    }

    #[test]
    fn day_iterates_hour_ascending() {
        let day: DayLog = [
            (15, LogEntry::rated(1, 1)),
            (8, LogEntry::rated(2, 2)),
            (11, LogEntry::rated(3, 3)),
        ]
        .into_iter()
        .collect();
        let hours: Vec<u8> = day.iter().map(|(h, _)| h).collect();
        assert_eq!(hours, vec![8, 11, 15]);
    }

    #[test]
    fn validate_rejects_bad_keys_and_levels() {
        let mut history = History::new();
        history.set_entry("2024-13-01", 9, LogEntry::rated(3, 3));
        assert_eq!(
            history.validate(),
            Err(ValidationError::InvalidDate("2024-13-01".into()))
        );

        let mut history = History::new();
        history.set_entry("2024-03-01", 30, LogEntry::rated(3, 3));
        assert_eq!(history.validate(), Err(ValidationError::HourOutOfRange(30)));

        let mut history = History::new();
        history.set_entry("2024-03-01", 9, LogEntry::rated(6, 3));
        assert!(matches!(
            history.validate(),
            Err(ValidationError::LevelOutOfRange { field: "focus", value: 6, .. })
        ));
    }

    #[test]
    fn json_shape_uses_string_hour_keys() {
        let mut history = History::new();
        history.set_entry("2024-03-01", 9, LogEntry::rated(5, 4).with_activity("deep work"));
        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(json["2024-03-01"]["9"]["focus"], 5);
        assert_eq!(json["2024-03-01"]["9"]["activity"], "deep work");
        assert_eq!(json["2024-03-01"]["9"]["completed"], false);

        let back: History = serde_json::from_value(json).unwrap();
        assert_eq!(back, history);
    }

    #[test]
    fn prune_counts_removed_entries() {
        let raw = r#"{"2024-03-01": {"9": {"completed": false}, "10": {"focus": 2, "energy": 3}}, "2024-03-02": {"8": {}}}"#;
        let mut history: History = serde_json::from_str(raw).unwrap();
        assert_eq!(history.prune(), 2);
        assert_eq!(history.entry_count(), 1);
        assert!(history.day("2024-03-02").is_none());
    }
}
