//! The ephemeris adapter seam.
//!
//! The numerical astronomy engine that turns a Julian Date into body
//! longitudes is an external collaborator. The derivation pipeline only
//! needs one capability from it, expressed by [`EphemerisSource`]: the
//! geocentric ecliptic longitude of a body at a Julian Date. Implementations
//! are expected to be deterministic and idempotent, so a failed lookup is
//! safe to retry.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Bodies the derivation pipeline queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    /// English name of the body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }
}

/// Errors from an ephemeris adapter.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The adapter could not resolve the requested longitude.
    Lookup(String),
    /// The Julian Date falls outside the adapter's supported span.
    EpochOutOfRange { jd: f64 },
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lookup(msg) => write!(f, "ephemeris lookup failed: {msg}"),
            Self::EpochOutOfRange { jd } => {
                write!(f, "JD {jd} outside the ephemeris model range")
            }
        }
    }
}

impl Error for EphemerisError {}

/// Source of ecliptic longitudes for a Julian Date.
pub trait EphemerisSource {
    /// Geocentric ecliptic longitude of `body` at `jd`, in degrees.
    ///
    /// The returned value need not be pre-normalized; the engine maps it
    /// into [0, 360) before classification.
    fn ecliptic_longitude(&self, jd: f64, body: Body) -> Result<f64, EphemerisError>;
}

/// An ephemeris over fixed, caller-supplied longitudes.
///
/// Used where the longitudes were computed out of process (the CLI's
/// supplied-longitude mode) and throughout the test suites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedEphemeris {
    pub sun_lon_deg: f64,
    pub moon_lon_deg: f64,
}

impl EphemerisSource for FixedEphemeris {
    fn ecliptic_longitude(&self, _jd: f64, body: Body) -> Result<f64, EphemerisError> {
        Ok(match body {
            Body::Sun => self.sun_lon_deg,
            Body::Moon => self.moon_lon_deg,
        })
    }
}
