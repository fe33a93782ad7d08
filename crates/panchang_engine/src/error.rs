//! Error types for panchang derivation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::ephemeris::{Body, EphemerisError};

/// Errors from the derivation pipeline.
///
/// A request either yields a complete record or fails with one of these;
/// there are no partial results. Civil date/time validation happens in
/// `panchang_time` before the engine is involved, so no time variant
/// appears here.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PanchangError {
    /// Error from the ephemeris adapter.
    Ephemeris(EphemerisError),
    /// The adapter returned a NaN or infinite longitude; classification
    /// indices would be undefined.
    NonFiniteLongitude { body: Body, value: f64 },
    /// Invalid geographic coordinate.
    InvalidLocation(&'static str),
}

impl Display for PanchangError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::NonFiniteLongitude { body, value } => {
                write!(f, "non-finite {} longitude: {value}", body.name())
            }
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
        }
    }
}

impl Error for PanchangError {}

impl From<EphemerisError> for PanchangError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}
