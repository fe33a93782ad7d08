//! The derivation pipeline: civil instant + location → day-sheet record.
//!
//! Stateless and side-effect free. Each request is an independent pure
//! computation over its own inputs and the static classification tables;
//! requests may run fully in parallel.

use panchang_time::CalendarInstant;
use panchang_vedic::{
    NakshatraInfo, RashiInfo, nakshatra_from_longitude, nakshatra_lord, normalize_360,
    rashi_from_longitude, rashi_lord, vaar_from_jd, vikram_samvat_year,
};

use crate::ephemeris::{Body, EphemerisSource};
use crate::error::PanchangError;
use crate::record::{GeoCoordinate, NOT_YET_CALCULATED, PanchangRecord};

/// Fetch a body's longitude and normalize it to [0, 360).
///
/// Rejects NaN/infinite adapter output before it can reach the index math,
/// where it would produce undefined lookup keys.
fn body_longitude<S: EphemerisSource>(
    source: &S,
    jd: f64,
    body: Body,
) -> Result<f64, PanchangError> {
    let raw = source.ecliptic_longitude(jd, body)?;
    if !raw.is_finite() {
        return Err(PanchangError::NonFiniteLongitude { body, value: raw });
    }
    Ok(normalize_360(raw))
}

/// Classify a normalized moon longitude into rashi and nakshatra.
pub fn classify_moon_longitude(moon_lon_deg: f64) -> (RashiInfo, NakshatraInfo) {
    (
        rashi_from_longitude(moon_lon_deg),
        nakshatra_from_longitude(moon_lon_deg),
    )
}

/// Compute the panchang record for a civil instant at a location.
///
/// The sun longitude is fetched and reported but only the moon longitude
/// drives the rashi/nakshatra classification; the location is carried for
/// the ascendant and rise/set slots. Placeholder fields carry
/// [`NOT_YET_CALCULATED`].
pub fn panchang_for_instant<S: EphemerisSource>(
    source: &S,
    instant: &CalendarInstant,
    _location: &GeoCoordinate,
) -> Result<PanchangRecord, PanchangError> {
    let jd = instant.to_jd();
    let sun_lon = body_longitude(source, jd, Body::Sun)?;
    let moon_lon = body_longitude(source, jd, Body::Moon)?;

    let (rashi_info, nakshatra_info) = classify_moon_longitude(moon_lon);
    let vaar = vaar_from_jd(jd);
    let samvat = vikram_samvat_year(instant.year());

    Ok(PanchangRecord {
        julian_day: jd,
        sun_longitude: sun_lon,
        moon_longitude: moon_lon,
        vaar: vaar.gujarati_name(),
        vikram_samvat: samvat.to_string(),
        moon_rashi: rashi_info.rashi.gujarati_name(),
        moon_rashi_lord: rashi_lord(rashi_info.rashi).gujarati_name(),
        nakshatra: nakshatra_info.nakshatra.gujarati_name(),
        nakshatra_lord: nakshatra_lord(nakshatra_info.nakshatra).gujarati_name(),
        tithi: NOT_YET_CALCULATED,
        nadi: NOT_YET_CALCULATED,
        sunrise: NOT_YET_CALCULATED,
        sunset: NOT_YET_CALCULATED,
        lagna_rashi: NOT_YET_CALCULATED,
        yoga: NOT_YET_CALCULATED,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::{EphemerisError, FixedEphemeris};

    fn instant() -> CalendarInstant {
        CalendarInstant::new(2024, 7, 24, 10, 0).unwrap()
    }

    fn location() -> GeoCoordinate {
        GeoCoordinate::new(23.03, 72.58).unwrap() // Ahmedabad
    }

    #[test]
    fn rejects_nan_moon_longitude() {
        let eph = FixedEphemeris {
            sun_lon_deg: 100.0,
            moon_lon_deg: f64::NAN,
        };
        let err = panchang_for_instant(&eph, &instant(), &location()).unwrap_err();
        assert!(matches!(
            err,
            PanchangError::NonFiniteLongitude {
                body: Body::Moon,
                ..
            }
        ));
    }

    #[test]
    fn rejects_infinite_sun_longitude() {
        let eph = FixedEphemeris {
            sun_lon_deg: f64::INFINITY,
            moon_lon_deg: 10.0,
        };
        let err = panchang_for_instant(&eph, &instant(), &location()).unwrap_err();
        assert!(matches!(
            err,
            PanchangError::NonFiniteLongitude { body: Body::Sun, .. }
        ));
    }

    #[test]
    fn bad_location_never_reaches_the_pipeline() {
        assert!(matches!(
            GeoCoordinate::new(123.0, 72.58),
            Err(PanchangError::InvalidLocation(_))
        ));
    }

    #[test]
    fn adapter_failure_propagates() {
        struct Failing;
        impl EphemerisSource for Failing {
            fn ecliptic_longitude(&self, jd: f64, _body: Body) -> Result<f64, EphemerisError> {
                Err(EphemerisError::EpochOutOfRange { jd })
            }
        }
        let err = panchang_for_instant(&Failing, &instant(), &location()).unwrap_err();
        assert!(matches!(err, PanchangError::Ephemeris(_)));
    }

    #[test]
    fn normalizes_raw_longitudes() {
        let eph = FixedEphemeris {
            sun_lon_deg: 370.0,
            moon_lon_deg: -10.0,
        };
        let record = panchang_for_instant(&eph, &instant(), &location()).unwrap();
        assert!((record.sun_longitude - 10.0).abs() < 1e-9);
        assert!((record.moon_longitude - 350.0).abs() < 1e-9);
    }
}
