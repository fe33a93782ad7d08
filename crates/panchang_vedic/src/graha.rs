//! Vedic planet (graha) enum and lordship tables.
//!
//! Each rashi has a planetary lord (standard BPHS assignment), and each
//! nakshatra has a Vimshottari lord following the fixed 9-graha cycle
//! starting from Ketu at Ashwini.

use crate::nakshatra::Nakshatra;
use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Gujarati-script name, as served to end users.
    pub const fn gujarati_name(self) -> &'static str {
        match self {
            Self::Surya => "સૂર્ય",
            Self::Chandra => "ચંદ્ર",
            Self::Mangal => "મંગળ",
            Self::Buddh => "બુધ",
            Self::Guru => "ગુરુ",
            Self::Shukra => "શુક્ર",
            Self::Shani => "શનિ",
            Self::Rahu => "રાહુ",
            Self::Ketu => "કેતુ",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }
}

/// Get the planetary lord of a rashi.
///
/// Standard Vedic lordship assignment (BPHS, universal convention):
/// - Mesha/Vrischika → Mangal (Mars)
/// - Vrishabha/Tula → Shukra (Venus)
/// - Mithuna/Kanya → Buddh (Mercury)
/// - Karka → Chandra (Moon)
/// - Simha → Surya (Sun)
/// - Dhanu/Meena → Guru (Jupiter)
/// - Makara/Kumbha → Shani (Saturn)
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

/// Get the lord of a rashi by 0-based index.
///
/// Returns None if index >= 12; out-of-domain indices are programming
/// errors and must not wrap silently.
pub fn rashi_lord_by_index(rashi_index: u8) -> Option<Graha> {
    if rashi_index >= 12 {
        return None;
    }
    Some(rashi_lord(crate::rashi::ALL_RASHIS[rashi_index as usize]))
}

/// The Vimshottari lord cycle: Ketu rules Ashwini, then Shukra, Surya,
/// Chandra, Mangal, Rahu, Guru, Shani, Buddh, repeating three times over
/// the 27 nakshatras.
pub const VIMSHOTTARI_LORDS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Get the Vimshottari lord of a nakshatra.
pub const fn nakshatra_lord(nakshatra: Nakshatra) -> Graha {
    VIMSHOTTARI_LORDS[(nakshatra.index() % 9) as usize]
}

/// Get the Vimshottari lord of a nakshatra by 0-based index.
///
/// Returns None if index >= 27.
pub fn nakshatra_lord_by_index(nakshatra_index: u8) -> Option<Graha> {
    if nakshatra_index >= 27 {
        return None;
    }
    Some(VIMSHOTTARI_LORDS[(nakshatra_index % 9) as usize])
}
