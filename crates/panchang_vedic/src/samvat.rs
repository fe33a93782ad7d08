//! Vikram Samvat era derivation.
//!
//! The Vikram Samvat year is derived from the Gregorian year by a constant
//! offset of 57. The true epoch transition follows the lunar calendar
//! (around Chaitra, March/April) and is month-dependent; this constant form
//! is exact only for the part of the year near its start. It is a known,
//! deliberate simplification and is preserved as such.

/// Fixed offset from the Gregorian year to the Vikram Samvat year.
pub const VIKRAM_SAMVAT_OFFSET: i32 = 57;

/// Vikram Samvat year for a Gregorian (CE) year.
pub const fn vikram_samvat_year(ce_year: i32) -> i32 {
    ce_year + VIKRAM_SAMVAT_OFFSET
}
