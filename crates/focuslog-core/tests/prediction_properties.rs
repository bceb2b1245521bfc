//! Property tests for the prediction engine.

use focuslog_core::history::{DayLog, History, LogEntry, TrackedHours};
use focuslog_core::prediction::{adjust, predict_focus, predict_task, MorningBand, ProposedTask};
use proptest::prelude::*;

fn entry_strategy() -> impl Strategy<Value = LogEntry> {
    (
        proptest::option::of(0u8..=5),
        proptest::option::of(0u8..=5),
        any::<bool>(),
    )
        .prop_map(|(focus, energy, completed)| LogEntry {
            activity: None,
            focus,
            energy,
            completed,
        })
}

fn history_strategy() -> impl Strategy<Value = History> {
    proptest::collection::vec((1u32..=28, 0u8..=23, entry_strategy()), 0..40).prop_map(
        |rows| {
            let mut history = History::new();
            for (day, hour, entry) in rows {
                history.set_entry(&format!("2024-02-{day:02}"), hour, entry);
            }
            history
        },
    )
}

proptest! {
    #[test]
    fn focus_prediction_is_a_probability(
        hour in 0u8..=23,
        yesterday in proptest::option::of(entry_strategy()),
        last in proptest::option::of(entry_strategy()),
    ) {
        let day: Option<DayLog> = yesterday.map(|e| [(hour, e)].into_iter().collect());
        let p = predict_focus(hour, day.as_ref(), last.as_ref());
        prop_assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn hours_outside_bands_are_not_adjusted(hour in 0u8..=23, base in 0.0f64..1.0) {
        prop_assume!(!(6..=10).contains(&hour) && !(13..=15).contains(&hour));
        prop_assert_eq!(adjust(base, hour, MorningBand::Focus), base);
        prop_assert_eq!(adjust(base, hour, MorningBand::Task), base);
    }

    #[test]
    fn task_probability_is_a_probability(
        history in history_strategy(),
        hour in 0u8..=23,
        duration in 1u32..=240,
    ) {
        let task = ProposedTask { hour, duration_minutes: duration };
        let est = predict_task(task, &history, TrackedHours::default());
        prop_assert!((0.0..=1.0).contains(&est.probability));
    }

    #[test]
    fn crossing_long_task_boundary_costs_a_tenth(
        history in history_strategy(),
        hour in 0u8..=23,
    ) {
        let tracked = TrackedHours::default();
        let short = predict_task(ProposedTask { hour, duration_minutes: 30 }, &history, tracked);
        let long = predict_task(ProposedTask { hour, duration_minutes: 46 }, &history, tracked);
        let unclamped = short.probability - 0.10 >= 0.0 && short.probability < 1.0;
        if short.suggestion != focuslog_core::prediction::INSUFFICIENT_DATA && unclamped {
            prop_assert!((short.probability - long.probability - 0.10).abs() < 1e-9);
        }
    }

    #[test]
    fn backup_round_trip(history in history_strategy()) {
        let payload = focuslog_core::backup::export(&history, "prop", chrono::Utc::now());
        let json = payload.to_json_pretty().unwrap();
        prop_assert_eq!(focuslog_core::backup::import(&json).unwrap(), history);
    }
}
