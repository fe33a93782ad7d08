//! Rashi (zodiac sign) classification.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg. Given an ecliptic longitude, we
//! identify which rashi the point falls in and how far into the sign it is.

use crate::util::normalize_360;

/// Span of one rashi: 30 degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Gujarati-script name, as served to end users.
    pub const fn gujarati_name(self) -> &'static str {
        match self {
            Self::Mesha => "મેષ",
            Self::Vrishabha => "વૃષભ",
            Self::Mithuna => "મિથુન",
            Self::Karka => "કર્ક",
            Self::Simha => "સિંહ",
            Self::Kanya => "કન્યા",
            Self::Tula => "તુલા",
            Self::Vrischika => "વૃશ્ચિક",
            Self::Dhanu => "ધન",
            Self::Makara => "મકર",
            Self::Kumbha => "કુંભ",
            Self::Meena => "મીન",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// Full rashi classification result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    /// The rashi (zodiac sign).
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Determine rashi from ecliptic longitude.
///
/// The longitude is normalized to [0, 360) first. Each rashi spans exactly
/// 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(lon_deg);
    let rashi_idx = (lon / RASHI_SPAN).floor() as u8;
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let rashi_idx = rashi_idx.min(11);
    let degrees_in_rashi = lon - (rashi_idx as f64) * RASHI_SPAN;

    RashiInfo {
        rashi: ALL_RASHIS[rashi_idx as usize],
        rashi_index: rashi_idx,
        degrees_in_rashi,
    }
}
