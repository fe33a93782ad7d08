//! Julian Date ↔ calendar conversions (proleptic Gregorian).
//!
//! Uses the Meeus arithmetic with the Gregorian century correction applied
//! unconditionally, so dates before the 1582 reform are interpreted on the
//! proleptic Gregorian calendar. This matches the calendar-system flag the
//! ephemeris adapters are driven with.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Convert a Gregorian calendar date to a Julian Date.
///
/// `day_frac` is the day of month plus the fractional day (e.g. `24.5` for
/// the 24th at 12:00). Pure and deterministic; no error path.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac + b
        - 1524.5
}

/// Convert a Julian Date back to a Gregorian calendar date.
///
/// Returns `(year, month, day_frac)` where `day_frac` carries the time of
/// day in its fractional part.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        assert_eq!(calendar_to_jd(2000, 1, 1.5), J2000_JD);
    }

    #[test]
    fn epoch_2024_07_24() {
        assert_eq!(calendar_to_jd(2024, 7, 24.0), 2_460_515.5);
    }

    #[test]
    fn sputnik_epoch() {
        // 1957-10-04.81 → JD 2436116.31 (Meeus example 7.a)
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-9);
    }

    #[test]
    fn deterministic() {
        let a = calendar_to_jd(2024, 7, 24.0 + 10.0 / 24.0);
        let b = calendar_to_jd(2024, 7, 24.0 + 10.0 / 24.0);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn january_rollover() {
        // month <= 2 branch
        let jd = calendar_to_jd(2024, 1, 1.0);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2024, 1));
        assert!((d - 1.0).abs() < 1e-9);
    }

    #[test]
    fn round_trip_mid_year() {
        let jd = calendar_to_jd(1991, 6, 15.25);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (1991, 6));
        assert!((d - 15.25).abs() < 1e-9);
    }

    #[test]
    fn round_trip_j2000() {
        let (y, m, d) = jd_to_calendar(J2000_JD);
        assert_eq!((y, m), (2000, 1));
        assert!((d - 1.5).abs() < 1e-9);
    }

    #[test]
    fn jd_monotone_across_days() {
        let mut prev = calendar_to_jd(2024, 2, 27.0);
        for day in 28..=29 {
            let jd = calendar_to_jd(2024, 2, day as f64);
            assert!((jd - prev - 1.0).abs() < 1e-9);
            prev = jd;
        }
        // 2024 is a leap year: Feb 29 → Mar 1
        let mar1 = calendar_to_jd(2024, 3, 1.0);
        assert!((mar1 - prev - 1.0).abs() < 1e-9);
    }
}
