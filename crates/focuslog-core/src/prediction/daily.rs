//! Retrospective summary of a single day.

use serde::{Deserialize, Serialize};

use crate::history::DayLog;

/// One qualifying hour of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub hour: u8,
    pub focus: u8,
    pub energy: u8,
}

/// Aggregate statistics for a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAnalysis {
    /// Mean focus, one decimal
    pub avg_focus: f64,
    /// Mean energy, one decimal
    pub avg_energy: f64,
    /// Percentage of qualifying hours marked completed
    pub completion_rate: u8,
    pub best_hour: u8,
    pub worst_hour: u8,
    pub series: Vec<SeriesPoint>,
}

impl DayAnalysis {
    /// Human-readable summary lines.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("Average focus:   {:.1}/5", self.avg_focus),
            format!("Average energy:  {:.1}/5", self.avg_energy),
            format!("Completion rate: {}%", self.completion_rate),
            format!("Best hour:       {:02}:00", self.best_hour),
            format!("Worst hour:      {:02}:00", self.worst_hour),
            format!("Hours analyzed:  {}", self.series.len()),
        ]
    }
}

/// Summarize a day's qualifying entries. `None` when there are none.
///
/// Best and worst hour maximize/minimize `focus + energy`; on a tie the
/// earliest hour wins.
pub fn analyze_day(day: &DayLog) -> Option<DayAnalysis> {
    let mut series = Vec::new();
    let mut completed = 0usize;
    let mut best: Option<(u8, u16)> = None;
    let mut worst: Option<(u8, u16)> = None;

    for (hour, focus, energy, entry) in day.qualifying() {
        let total = u16::from(focus) + u16::from(energy);
        if best.map_or(true, |(_, t)| total > t) {
            best = Some((hour, total));
        }
        if worst.map_or(true, |(_, t)| total < t) {
            worst = Some((hour, total));
        }
        if entry.completed {
            completed += 1;
        }
        series.push(SeriesPoint { hour, focus, energy });
    }

    let (best_hour, _) = best?;
    let (worst_hour, _) = worst?;
    let n = series.len() as f64;
    let sum_focus: u32 = series.iter().map(|p| u32::from(p.focus)).sum();
    let sum_energy: u32 = series.iter().map(|p| u32::from(p.energy)).sum();

    Some(DayAnalysis {
        avg_focus: round1(f64::from(sum_focus) / n),
        avg_energy: round1(f64::from(sum_energy) / n),
        completion_rate: (100.0 * completed as f64 / n).round() as u8,
        best_hour,
        worst_hour,
        series,
    })
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
