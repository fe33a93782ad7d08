//! Error types for calendar validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from constructing a civil calendar instant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1..=12.
    MonthOutOfRange(u32),
    /// Day invalid for the given year/month.
    DayOutOfRange { year: i32, month: u32, day: u32 },
    /// Hour outside 0..=23.
    HourOutOfRange(u32),
    /// Minute outside 0..=59.
    MinuteOutOfRange(u32),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MonthOutOfRange(m) => write!(f, "month {m} outside 1..=12"),
            Self::DayOutOfRange { year, month, day } => {
                write!(f, "day {day} invalid for {year}-{month:02}")
            }
            Self::HourOutOfRange(h) => write!(f, "hour {h} outside 0..=23"),
            Self::MinuteOutOfRange(m) => write!(f, "minute {m} outside 0..=59"),
        }
    }
}

impl Error for TimeError {}
