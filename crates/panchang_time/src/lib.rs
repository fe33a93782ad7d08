//! Calendar ↔ Julian Day conversions and the civil instant type.
//!
//! This crate provides:
//! - Proleptic-Gregorian Julian Date ↔ calendar conversions
//! - `CalendarInstant`, a validated civil date/time value type
//!
//! All conversions use the Gregorian calendar convention for every date,
//! including dates before the 1582 reform (proleptic). No timezone handling
//! is performed; instants are naive local time.

pub mod error;
pub mod instant;
pub mod julian;

pub use error::TimeError;
pub use instant::{CalendarInstant, days_in_month, is_gregorian_leap_year};
pub use julian::{J2000_JD, calendar_to_jd, jd_to_calendar};
