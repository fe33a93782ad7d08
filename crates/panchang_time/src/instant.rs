//! Civil calendar instant with construction-time validation.
//!
//! `CalendarInstant` is the canonical input of the derivation pipeline:
//! a naive local date/time on the proleptic Gregorian calendar. The
//! constructor enforces the field ranges, so every constructed instant
//! converts to a Julian Date without further checks.

use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// Civil date/time to minute precision (naive local, proleptic Gregorian).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarInstant {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

/// True when `year` is a leap year on the proleptic Gregorian calendar.
pub fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month, or 0 if `month` is out of range.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_gregorian_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

impl CalendarInstant {
    /// Construct a validated instant.
    ///
    /// Enforces month ∈ 1..=12, day valid for the month/year, hour ∈ 0..=23
    /// and minute ∈ 0..=59.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::MonthOutOfRange(month));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(TimeError::DayOutOfRange { year, month, day });
        }
        if hour > 23 {
            return Err(TimeError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeError::MinuteOutOfRange(minute));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Time of day as a decimal hour: `hour + minute / 60`.
    pub fn decimal_hour(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0
    }

    /// Julian Date of this instant.
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64 + self.decimal_hour() / 24.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }
}

impl std::fmt::Display for CalendarInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}
