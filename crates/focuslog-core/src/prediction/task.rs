//! Success estimate for a proposed task.

use serde::{Deserialize, Serialize};

use super::time_of_day::{clamp_unit, MorningBand, MORNING_BOOST};
use crate::history::{History, TrackedHours};

pub const INSUFFICIENT_DATA: &str = "insufficient data for this hour";
pub const FAVORABLE_TIMING: &str = "timing is favorable based on history";

/// Probability returned when the hour has no history.
pub const NO_DATA_PROBABILITY: f64 = 0.5;
/// Estimates below this get an optimization suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.65;
/// How much better another hour must be to be suggested.
pub const BETTER_HOUR_MARGIN: f64 = 0.10;
/// Tasks longer than this are penalized.
pub const LONG_TASK_MINUTES: u32 = 45;
pub const LONG_TASK_PENALTY: f64 = 0.10;
/// Tasks longer than this may be suggested to shrink to it.
pub const SHORTENED_TASK_MINUTES: u32 = 30;
/// Shortening is only suggested above this probability.
pub const SHORTEN_FLOOR: f64 = 0.4;

/// A task the user is thinking about scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposedTask {
    pub hour: u8,
    pub duration_minutes: u32,
}

/// Success probability plus advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskEstimate {
    pub probability: f64,
    pub suggestion: String,
}

/// Mean `(focus + energy) / 10` per tracked hour across all days, 0 for hours
/// without qualifying entries.
pub fn hour_profile(history: &History, tracked: TrackedHours) -> Vec<(u8, f64)> {
    tracked
        .into_iter()
        .map(|hour| (hour, mean(scores_at(history, hour)).unwrap_or(0.0)))
        .collect()
}

/// Estimate how likely `task` is to go well given `history`.
///
/// Duration penalty and morning boost apply regardless of how many samples
/// back the estimate.
pub fn predict_task(
    task: ProposedTask,
    history: &History,
    tracked: TrackedHours,
) -> TaskEstimate {
    let relevant: Vec<(u8, u8)> = history
        .entries()
        .filter(|(_, hour, _)| *hour == task.hour)
        .filter_map(|(_, _, e)| e.levels())
        .collect();

    if relevant.is_empty() {
        tracing::trace!(hour = task.hour, "no history for task hour");
        return TaskEstimate {
            probability: NO_DATA_PROBABILITY,
            suggestion: INSUFFICIENT_DATA.to_string(),
        };
    }

    let n = relevant.len() as f64;
    let avg_focus = relevant.iter().map(|(f, _)| f64::from(*f)).sum::<f64>() / n;
    let avg_energy = relevant.iter().map(|(_, e)| f64::from(*e)).sum::<f64>() / n;

    let mut probability = (avg_focus + avg_energy) / 10.0;
    if task.duration_minutes > LONG_TASK_MINUTES {
        probability -= LONG_TASK_PENALTY;
    }
    if MorningBand::Task.hours().contains(&task.hour) {
        probability += MORNING_BOOST;
    }
    let probability = clamp_unit(probability);

    tracing::trace!(
        hour = task.hour,
        duration = task.duration_minutes,
        samples = relevant.len(),
        probability,
        "task estimate"
    );

    let suggestion = if probability >= SUGGESTION_THRESHOLD {
        FAVORABLE_TIMING.to_string()
    } else {
        suggest(task, probability, history, tracked)
    };

    TaskEstimate {
        probability,
        suggestion,
    }
}

fn suggest(
    task: ProposedTask,
    probability: f64,
    history: &History,
    tracked: TrackedHours,
) -> String {
    let mut parts = Vec::new();

    // hour_profile is hour-ascending, so the first match is the earliest
    let better = hour_profile(history, tracked)
        .into_iter()
        .find(|(_, score)| *score > probability + BETTER_HOUR_MARGIN);
    if let Some((hour, _)) = better {
        parts.push(format!("consider moving this task to {hour:02}:00"));
    }

    if task.duration_minutes > SHORTENED_TASK_MINUTES && probability > SHORTEN_FLOOR {
        parts.push(format!(
            "consider shortening it to {SHORTENED_TASK_MINUTES} minutes"
        ));
    }

    parts.join(" ")
}

fn scores_at(history: &History, hour: u8) -> impl Iterator<Item = f64> + '_ {
    history
        .entries()
        .filter(move |(_, h, _)| *h == hour)
        .filter_map(|(_, _, e)| e.score())
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    (count > 0).then(|| sum / count as f64)
}
