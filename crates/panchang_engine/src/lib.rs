//! Panchang derivation engine.
//!
//! Converts raw ephemeris output into a classified calendar day-sheet:
//! moon rashi and nakshatra with their lords, vaar (weekday) and Vikram
//! Samvat era, assembled into a serializable [`PanchangRecord`].
//!
//! The numerical astronomy engine itself is external, behind the
//! [`EphemerisSource`] trait. Transport concerns (HTTP, validation of raw
//! request strings) are the caller's responsibility; the engine takes an
//! already-validated `CalendarInstant` and `GeoCoordinate`.

pub mod ephemeris;
pub mod error;
pub mod panchang;
pub mod record;

pub use ephemeris::{Body, EphemerisError, EphemerisSource, FixedEphemeris};
pub use error::PanchangError;
pub use panchang::{classify_moon_longitude, panchang_for_instant};
pub use record::{GeoCoordinate, NOT_YET_CALCULATED, PanchangRecord};
