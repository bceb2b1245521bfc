//! # focuslog Core Library
//!
//! This library provides the core logic for focuslog, an hourly focus and
//! energy tracker. The CLI binary is a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **History**: date -> hour -> self-reported entry, with empty entries
//!   pruned on write
//! - **Prediction**: pure functions over a history snapshot (day forecast,
//!   daily analysis, task estimates)
//! - **Storage**: SQLite-backed history store and TOML configuration
//! - **Backup**: JSON export/import of the full history
//!
//! ## Key Components
//!
//! - [`History`]: the hourly log
//! - [`forecast_day`], [`analyze_day`], [`predict_task`]: the prediction engine
//! - [`Database`]: SQLite implementation of [`HistoryStore`]
//! - [`Config`]: application configuration management

pub mod backup;
pub mod error;
pub mod history;
pub mod prediction;
pub mod storage;

pub use backup::BackupPayload;
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use history::{DayLog, History, LogEntry, TrackedHours};
pub use prediction::{
    analyze_day, forecast_day, predict_focus, predict_task, DayAnalysis, HourForecast,
    ProposedTask, TaskEstimate,
};
pub use storage::{Config, Database, HistoryStore};
