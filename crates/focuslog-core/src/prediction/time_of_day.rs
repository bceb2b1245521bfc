//! Fixed time-of-day adjustments.
//!
//! A post-lunch dip and a morning boost are applied on top of a base
//! probability. The focus and task predictors use different morning bands.

use std::ops::RangeInclusive;

/// Post-prandial dip hours.
pub const AFTERNOON_DIP_BAND: RangeInclusive<u8> = 13..=15;
/// Morning boost hours for the hourly focus forecast.
pub const FOCUS_MORNING_BAND: RangeInclusive<u8> = 6..=9;
/// Morning boost hours for task estimates.
pub const TASK_MORNING_BAND: RangeInclusive<u8> = 6..=10;

pub const AFTERNOON_DIP: f64 = 0.10;
pub const MORNING_BOOST: f64 = 0.10;

/// Which morning band a caller applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorningBand {
    Focus,
    Task,
}

impl MorningBand {
    pub fn hours(self) -> RangeInclusive<u8> {
        match self {
            MorningBand::Focus => FOCUS_MORNING_BAND,
            MorningBand::Task => TASK_MORNING_BAND,
        }
    }
}

/// Additive time-of-day term for `hour`.
pub fn offset(hour: u8, band: MorningBand) -> f64 {
    if AFTERNOON_DIP_BAND.contains(&hour) {
        -AFTERNOON_DIP
    } else if band.hours().contains(&hour) {
        MORNING_BOOST
    } else {
        0.0
    }
}

/// Apply the time-of-day term. Not clamped; see [`clamp_unit`].
pub fn adjust(base: f64, hour: u8, band: MorningBand) -> f64 {
    base + offset(hour, band)
}

/// Clamp a probability to [0, 1].
pub fn clamp_unit(p: f64) -> f64 {
    p.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn afternoon_dip_applies_to_both_bands() {
        for hour in 13..=15 {
            assert!((adjust(0.5, hour, MorningBand::Focus) - 0.4).abs() < 1e-9);
            assert!((adjust(0.5, hour, MorningBand::Task) - 0.4).abs() < 1e-9);
        }
    }

    #[test]
    fn hour_ten_is_boosted_only_for_tasks() {
        assert_eq!(offset(10, MorningBand::Focus), 0.0);
        assert_eq!(offset(10, MorningBand::Task), MORNING_BOOST);
        assert_eq!(offset(9, MorningBand::Focus), MORNING_BOOST);
        assert_eq!(offset(6, MorningBand::Focus), MORNING_BOOST);
    }

    #[test]
    fn other_hours_are_unchanged() {
        for hour in (0..24u8).filter(|h| !(6..=10).contains(h) && !(13..=15).contains(h)) {
            assert_eq!(adjust(0.37, hour, MorningBand::Focus), 0.37);
            assert_eq!(adjust(0.37, hour, MorningBand::Task), 0.37);
        }
    }

    #[test]
    fn adjust_does_not_clamp() {
        assert!(adjust(0.95, 8, MorningBand::Focus) > 1.0);
        assert!(adjust(0.05, 14, MorningBand::Task) < 0.0);
        assert_eq!(clamp_unit(1.05), 1.0);
        assert_eq!(clamp_unit(-0.05), 0.0);
    }
}
