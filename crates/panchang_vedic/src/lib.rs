//! Vedic classification tables and index math.
//!
//! This crate provides:
//! - Rashi (zodiac sign) classification from ecliptic longitude
//! - Nakshatra (lunar mansion) classification with pada
//! - Graha lordship tables for rashis and nakshatras
//! - Vaar (weekday) derivation from a Julian Date
//! - Vikram Samvat era derivation
//!
//! All tables are compile-time constants, safe for unlimited concurrent
//! readers. All functions are pure and total over their documented domains.

pub mod graha;
pub mod nakshatra;
pub mod rashi;
pub mod samvat;
pub mod util;
pub mod vaar;

pub use graha::{
    ALL_GRAHAS, Graha, VIMSHOTTARI_LORDS, nakshatra_lord, nakshatra_lord_by_index, rashi_lord,
    rashi_lord_by_index,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, RASHI_SPAN, Rashi, RashiInfo, rashi_from_longitude};
pub use samvat::{VIKRAM_SAMVAT_OFFSET, vikram_samvat_year};
pub use util::normalize_360;
pub use vaar::{ALL_VAARS, Vaar, vaar_from_jd};
