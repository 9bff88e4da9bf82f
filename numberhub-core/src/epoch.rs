//! Date <-> Unix epoch conversion
//!
//! The epoch screen collects digits left to right in the order
//! `HHmmssddMMyyyy`; missing trailing digits count as zeros. Dates use the
//! proleptic Gregorian calendar in UTC and years 0 through 9999.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Number of digits in a complete `HHmmssddMMyyyy` input
pub const DIGIT_COUNT: usize = 14;

const MAX_YEAR: i32 = 9999;

/// Days in each month (non-leap year)
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days from year 0 to 1970-01-01
const UNIX_EPOCH_DAYS: i64 = 719_468;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateTimeError {
    #[error("month {0} is not in 01-12")]
    InvalidMonth(u32),

    #[error("day {0} does not exist in {1:02}/{2:04}")]
    InvalidDay(u32, u32, i32),

    #[error("hour {0} is not in 00-23")]
    InvalidHour(u32),

    #[error("minute {0} is not in 00-59")]
    InvalidMinute(u32),

    #[error("second {0} is not in 00-59")]
    InvalidSecond(u32),

    #[error("{0}")]
    ParseError(String),

    #[error("date outside years 0000-9999")]
    Overflow,
}

/// A validated calendar date and time of day (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EpochDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl EpochDate {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, DateTimeError> {
        if !(0..=MAX_YEAR).contains(&year) {
            return Err(DateTimeError::Overflow);
        }
        if !(1..=12).contains(&month) {
            return Err(DateTimeError::InvalidMonth(month));
        }
        if !(1..=days_in_month(year, month)).contains(&day) {
            return Err(DateTimeError::InvalidDay(day, month, year));
        }
        match (hour, minute, second) {
            (h, _, _) if h >= 24 => Err(DateTimeError::InvalidHour(h)),
            (_, m, _) if m >= 60 => Err(DateTimeError::InvalidMinute(m)),
            (_, _, s) if s >= 60 => Err(DateTimeError::InvalidSecond(s)),
            _ => Ok(()),
        }?;

        Ok(Self { year, month, day, hour, minute, second })
    }

    /// Parse a partial or complete `HHmmssddMMyyyy` digit string
    pub fn from_digits(input: &str) -> Result<Self, DateTimeError> {
        if input.len() > DIGIT_COUNT {
            return Err(DateTimeError::ParseError(format!(
                "expected at most {} digits, got {}", DIGIT_COUNT, input.len()
            )));
        }
        if let Some(c) = input.chars().find(|c| !c.is_ascii_digit()) {
            return Err(DateTimeError::ParseError(format!("unexpected character '{}'", c)));
        }

        let padded = format!("{:0<width$}", input, width = DIGIT_COUNT);
        // All ASCII digits, so every slice parses
        let field = |range: std::ops::Range<usize>| -> u32 {
            padded[range].parse().unwrap_or(0)
        };

        Self::new(
            field(10..14) as i32,
            field(8..10),
            field(6..8),
            field(0..2),
            field(2..4),
            field(4..6),
        )
    }

    /// Render back into the 14 digit `HHmmssddMMyyyy` form
    pub fn to_digits(&self) -> String {
        format!(
            "{:02}{:02}{:02}{:02}{:02}{:04}",
            self.hour, self.minute, self.second, self.day, self.month, self.year
        )
    }

    /// Seconds since 1970-01-01T00:00:00Z (negative before the epoch)
    pub fn to_unix(&self) -> i64 {
        days_since_epoch(self.year, self.month, self.day) * SECONDS_PER_DAY
            + self.hour as i64 * SECONDS_PER_HOUR
            + self.minute as i64 * SECONDS_PER_MINUTE
            + self.second as i64
    }

    pub fn from_unix(secs: i64) -> Result<Self, DateTimeError> {
        let days = secs.div_euclid(SECONDS_PER_DAY);
        let time = secs.rem_euclid(SECONDS_PER_DAY);
        let (year, month, day) = date_from_days(days).ok_or(DateTimeError::Overflow)?;

        Self::new(
            year,
            month,
            day,
            (time / SECONDS_PER_HOUR) as u32,
            (time % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u32,
            (time % SECONDS_PER_MINUTE) as u32,
        )
    }
}

impl fmt::Display for EpochDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02} {:02}.{:02}.{:04}",
            self.hour, self.minute, self.second, self.day, self.month, self.year
        )
    }
}

/// Convert an epoch screen digit string to Unix seconds
pub fn date_to_unix(digits: &str) -> Result<i64, DateTimeError> {
    EpochDate::from_digits(digits).map(|date| date.to_unix())
}

/// Convert Unix seconds to an epoch screen digit string
pub fn unix_to_date(secs: i64) -> Result<String, DateTimeError> {
    EpochDate::from_unix(secs).map(|date| date.to_digits())
}

pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match (month, is_leap_year(year)) {
        (2, true) => 29,
        (1..=12, _) => DAYS_IN_MONTH[month as usize - 1],
        _ => 0,
    }
}

// Calendar arithmetic over 400 year cycles of 146097 days, with years
// starting in March so the leap day ends the year (Hinnant's algorithm).

const DAYS_PER_CYCLE: i64 = 146_097;

/// Days since 1970-01-01
fn days_since_epoch(year: i32, month: u32, day: u32) -> i64 {
    let month = month as i64;
    let march_year = year as i64 - i64::from(month <= 2);
    let cycle = march_year.div_euclid(400);
    let year_of_cycle = march_year.rem_euclid(400);
    let march_month = (month + 9) % 12;
    let day_of_year = (153 * march_month + 2) / 5 + day as i64 - 1;
    let day_of_cycle = year_of_cycle * 365 + year_of_cycle / 4 - year_of_cycle / 100 + day_of_year;
    cycle * DAYS_PER_CYCLE + day_of_cycle - UNIX_EPOCH_DAYS
}

/// Calendar date of a day count, `None` when the year leaves `i32`
fn date_from_days(days: i64) -> Option<(i32, u32, u32)> {
    let shifted = days.checked_add(UNIX_EPOCH_DAYS)?;
    let cycle = shifted.div_euclid(DAYS_PER_CYCLE);
    let day_of_cycle = shifted.rem_euclid(DAYS_PER_CYCLE);
    let year_of_cycle =
        (day_of_cycle - day_of_cycle / 1460 + day_of_cycle / 36524 - day_of_cycle / 146_096) / 365;
    let day_of_year = day_of_cycle - (365 * year_of_cycle + year_of_cycle / 4 - year_of_cycle / 100);
    let march_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * march_month + 2) / 5 + 1;
    let month = (march_month + 2) % 12 + 1;
    let year = year_of_cycle + cycle * 400 + i64::from(month <= 2);
    Some((i32::try_from(year).ok()?, month as u32, day as u32))
}
