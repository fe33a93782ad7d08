//! Geographic coordinate input and the output day-sheet record.

use serde::Serialize;

use crate::error::PanchangError;

/// Sentinel carried by output fields whose computation is not implemented.
///
/// A distinguishable marker rather than an omitted field, so consumers can
/// detect incompleteness. Part of the output compatibility contract.
pub const NOT_YET_CALCULATED: &str = "not yet calculated";

/// Geographic location in degrees.
///
/// Carried through the pipeline but not consumed by the classification
/// itself; reserved for ascendant and rise/set work. The constructor
/// enforces the coordinate ranges, so a constructed value is always valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    lat_deg: f64,
    lon_deg: f64,
}

impl GeoCoordinate {
    /// Construct a validated coordinate.
    ///
    /// Enforces finite latitude ∈ [-90, 90] and longitude ∈ [-180, 180].
    pub fn new(lat_deg: f64, lon_deg: f64) -> Result<Self, PanchangError> {
        if !lat_deg.is_finite() || lat_deg.abs() > 90.0 {
            return Err(PanchangError::InvalidLocation(
                "latitude must be finite and within [-90, 90]",
            ));
        }
        if !lon_deg.is_finite() || lon_deg.abs() > 180.0 {
            return Err(PanchangError::InvalidLocation(
                "longitude must be finite and within [-180, 180]",
            ));
        }
        Ok(Self { lat_deg, lon_deg })
    }

    /// Latitude in degrees, positive north.
    pub fn lat_deg(&self) -> f64 {
        self.lat_deg
    }

    /// Longitude in degrees, positive east.
    pub fn lon_deg(&self) -> f64 {
        self.lon_deg
    }
}

/// The computed day-sheet for one instant.
///
/// Field names (camelCase in JSON) and the Gujarati label values match the
/// original service response. Created fresh per request, serialized and
/// discarded; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanchangRecord {
    /// Julian Date of the request instant.
    pub julian_day: f64,
    /// Sun's ecliptic longitude, degrees [0, 360).
    pub sun_longitude: f64,
    /// Moon's ecliptic longitude, degrees [0, 360).
    pub moon_longitude: f64,
    /// Weekday label.
    pub vaar: &'static str,
    /// Vikram Samvat era year, as a string.
    pub vikram_samvat: String,
    /// Moon's rashi (zodiac sign) label.
    pub moon_rashi: &'static str,
    /// Lord of the moon's rashi.
    pub moon_rashi_lord: &'static str,
    /// Moon's nakshatra (lunar mansion) label.
    pub nakshatra: &'static str,
    /// Vimshottari lord of the nakshatra.
    pub nakshatra_lord: &'static str,
    // Placeholder slots: present in the contract, intentionally unfilled.
    pub tithi: &'static str,
    pub nadi: &'static str,
    pub sunrise: &'static str,
    pub sunset: &'static str,
    pub lagna_rashi: &'static str,
    pub yoga: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_accepts_bounds() {
        assert!(GeoCoordinate::new(90.0, 180.0).is_ok());
        assert!(GeoCoordinate::new(-90.0, -180.0).is_ok());
        let loc = GeoCoordinate::new(23.03, 72.58).unwrap();
        assert!((loc.lat_deg() - 23.03).abs() < 1e-12);
        assert!((loc.lon_deg() - 72.58).abs() < 1e-12);
    }

    #[test]
    fn location_rejects_out_of_range() {
        for (lat, lon) in [
            (90.1, 0.0),
            (-91.0, 0.0),
            (0.0, 180.5),
            (0.0, -181.0),
            (f64::NAN, 0.0),
            (0.0, f64::INFINITY),
        ] {
            assert!(
                matches!(
                    GeoCoordinate::new(lat, lon),
                    Err(PanchangError::InvalidLocation(_))
                ),
                "({lat}, {lon}) should be rejected"
            );
        }
    }
}
