//! The contiguous range of hours a user logs and gets forecasts for.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const DEFAULT_START_HOUR: u8 = 7;
pub const DEFAULT_END_HOUR: u8 = 23;

/// Inclusive interval of tracked hours, e.g. 7..=23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedHours {
    start: u8,
    end: u8,
}

impl Default for TrackedHours {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_HOUR,
            end: DEFAULT_END_HOUR,
        }
    }
}

impl TrackedHours {
    /// Build a range; `start <= end` and both within 0-23.
    pub fn new(start: u8, end: u8) -> Result<Self, ValidationError> {
        if start > end || end > 23 {
            return Err(ValidationError::InvalidTrackedRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u8 {
        self.start
    }

    pub fn end(&self) -> u8 {
        self.end
    }

    pub fn contains(&self, hour: u8) -> bool {
        self.range().contains(&hour)
    }

    pub fn range(&self) -> RangeInclusive<u8> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        usize::from(self.end - self.start) + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl IntoIterator for TrackedHours {
    type Item = u8;
    type IntoIter = RangeInclusive<u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_is_seven_to_twenty_three() {
        let hours = TrackedHours::default();
        assert_eq!(hours.start(), 7);
        assert_eq!(hours.end(), 23);
        assert_eq!(hours.len(), 17);
        assert!(hours.contains(7));
        assert!(!hours.contains(6));
    }

    #[test]
    fn rejects_inverted_and_out_of_day_ranges() {
        assert!(TrackedHours::new(10, 9).is_err());
        assert!(TrackedHours::new(0, 24).is_err());
        assert!(TrackedHours::new(12, 12).is_ok());
        assert!(TrackedHours::new(0, 23).is_ok());
    }

    #[test]
    fn iterates_every_hour() {
        let hours: Vec<u8> = TrackedHours::new(9, 12).unwrap().into_iter().collect();
        assert_eq!(hours, vec![9, 10, 11, 12]);
    }
}
