//! Prediction engine.
//!
//! Pure functions over a [`History`](crate::history::History) snapshot:
//!
//! - [`forecast_day`]: per-hour focus probability for today
//! - [`analyze_day`]: statistics for a single day
//! - [`predict_task`]: success estimate and advice for a proposed task
//!
//! None of these call each other or keep state between calls.

mod daily;
mod focus;
mod task;
pub mod time_of_day;

pub use daily::{analyze_day, DayAnalysis, SeriesPoint};
pub use focus::{
    actual_percent, forecast_day, last_completed_hour, predict_focus, render_forecast_chart,
    HourForecast,
};
pub use task::{
    hour_profile, predict_task, ProposedTask, TaskEstimate, FAVORABLE_TIMING, INSUFFICIENT_DATA,
};
pub use time_of_day::{adjust, clamp_unit, MorningBand};
