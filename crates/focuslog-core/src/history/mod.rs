//! Hour-by-hour focus/energy history.
//!
//! A [`History`] maps ISO dates to a [`DayLog`], which maps hour-of-day to a
//! [`LogEntry`]. Empty entries are never kept. The prediction engine reads
//! history snapshots and never mutates them.

mod entry;
mod hours;

pub use entry::{
    date_key, parse_date, validate_slot, DayLog, History, LogEntry, DATE_FORMAT, MAX_LEVEL,
};
pub use hours::{TrackedHours, DEFAULT_END_HOUR, DEFAULT_START_HOUR};
