pub mod analyze;
pub mod backup;
pub mod config;
pub mod estimate;
pub mod forecast;
pub mod log;

use chrono::{Local, NaiveDate, Timelike};
use focuslog_core::history::{date_key, parse_date};

/// `--date` value or today's local date.
pub fn resolve_date(date: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        Some(d) => Ok(parse_date(d)?),
        None => Ok(Local::now().date_naive()),
    }
}

/// `--date` value or today's local date, as a history key.
pub fn resolve_date_key(date: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    resolve_date(date).map(date_key)
}

/// `--hour` value or the current local hour.
pub fn resolve_hour(hour: Option<u8>) -> u8 {
    hour.unwrap_or_else(|| Local::now().hour() as u8)
}

/// Parse an hour argument, rejecting anything past 23.
pub fn parse_hour(s: &str) -> Result<u8, String> {
    let hour: u8 = s.parse().map_err(|_| format!("'{s}' is not an hour"))?;
    if hour > 23 {
        return Err(format!("hour {hour} out of range (0-23)"));
    }
    Ok(hour)
}

/// Parse a focus/energy level (1-5).
pub fn parse_level(s: &str) -> Result<u8, String> {
    let level: u8 = s.parse().map_err(|_| format!("'{s}' is not a level"))?;
    if !(1..=focuslog_core::history::MAX_LEVEL).contains(&level) {
        return Err(format!("level {level} out of range (1-5)"));
    }
    Ok(level)
}
