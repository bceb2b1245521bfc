//! Hourly focus forecast for the current day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::time_of_day::{adjust, clamp_unit, MorningBand};
use crate::history::{DayLog, History, LogEntry, TrackedHours};

/// Prior used when nothing is known about an hour.
pub const UNINFORMED_PRIOR: f64 = 0.5;
/// Penalty for falling back to today's last completed hour.
pub const SAME_DAY_FALLBACK_DECAY: f64 = 0.05;

/// One row of the day forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourForecast {
    pub hour: u8,
    /// Predicted focus probability, 0-100
    pub predicted_percent: u8,
    /// Logged focus for this hour scaled to 0-100, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_percent: Option<u8>,
}

/// Focus probability for `hour`.
///
/// Yesterday's entry at the same hour wins; otherwise today's most recent
/// qualifying entry is used with a small decay; otherwise the prior.
pub fn predict_focus(
    hour: u8,
    yesterday: Option<&DayLog>,
    last_completed: Option<&LogEntry>,
) -> f64 {
    let same_hour = yesterday.and_then(|d| d.get(hour)).and_then(LogEntry::score);
    let base = match same_hour {
        Some(score) => score,
        None => last_completed
            .and_then(LogEntry::score)
            .map(|score| score - SAME_DAY_FALLBACK_DECAY)
            .unwrap_or(UNINFORMED_PRIOR),
    };
    clamp_unit(adjust(base, hour, MorningBand::Focus))
}

/// Most recent qualifying entry strictly before `current_hour`, scanning
/// back to the first tracked hour.
pub fn last_completed_hour(
    today: Option<&DayLog>,
    current_hour: u8,
    tracked: TrackedHours,
) -> Option<&LogEntry> {
    let today = today?;
    let upper = current_hour.checked_sub(1)?;
    if upper < tracked.start() {
        return None;
    }
    (tracked.start()..=upper)
        .rev()
        .filter_map(|h| today.get(h))
        .find(|e| e.qualifying())
}

/// Observed focus for an hour as a percentage (`focus * 20`).
pub fn actual_percent(entry: Option<&LogEntry>) -> Option<u8> {
    entry
        .and_then(|e| e.focus)
        .filter(|f| *f != 0)
        .map(|f| f.saturating_mul(20).min(100))
}

/// Forecast every tracked hour of `today`.
pub fn forecast_day(
    history: &History,
    today: NaiveDate,
    current_hour: u8,
    tracked: TrackedHours,
) -> Vec<HourForecast> {
    let yesterday = today.pred_opt().and_then(|d| history.day_on(d));
    let today_log = history.day_on(today);
    let fallback = last_completed_hour(today_log, current_hour, tracked);

    tracing::trace!(
        %today,
        current_hour,
        has_yesterday = yesterday.is_some(),
        has_fallback = fallback.is_some(),
        "building focus forecast"
    );

    tracked
        .into_iter()
        .map(|hour| HourForecast {
            hour,
            predicted_percent: to_percent(predict_focus(hour, yesterday, fallback)),
            actual_percent: actual_percent(today_log.and_then(|d| d.get(hour))),
        })
        .collect()
}

fn to_percent(p: f64) -> u8 {
    (clamp_unit(p) * 100.0).round() as u8
}

/// Render the forecast as an ASCII bar chart, predicted vs actual.
pub fn render_forecast_chart(forecast: &[HourForecast]) -> String {
    let mut output = String::from("\nFocus Forecast:\n");
    output.push_str(&"─".repeat(50));
    output.push('\n');

    for row in forecast {
        let bar_length = usize::from(row.predicted_percent) * 30 / 100;
        let bar = "█".repeat(bar_length);
        let empty = " ".repeat(30 - bar_length);
        let actual = match row.actual_percent {
            Some(a) => format!("{a:>3}%"),
            None => "   ·".to_string(),
        };
        output.push_str(&format!(
            "{:02}:00 {}{} {:>3}% {}\n",
            row.hour, bar, empty, row.predicted_percent, actual
        ));
    }

    output.push_str(&"─".repeat(50));
    output.push_str("\npredicted  actual (· = not logged)\n");
    output
}
