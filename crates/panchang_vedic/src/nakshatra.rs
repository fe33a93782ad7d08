//! Nakshatra (lunar mansion) classification.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each. Each nakshatra has 4 padas (quarters) of
//! 3 deg 20'. The span must be computed as the exact real division 360/27;
//! a rounded literal would drift the boundaries.

use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras from Ashwini to Revati (uniform 13 deg 20' each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Gujarati-script name, as served to end users.
    pub const fn gujarati_name(self) -> &'static str {
        match self {
            Self::Ashwini => "અશ્વિની",
            Self::Bharani => "ભરણી",
            Self::Krittika => "કૃત્તિકા",
            Self::Rohini => "રોહિણી",
            Self::Mrigashira => "મૃગશીર્ષ",
            Self::Ardra => "આર્દ્રા",
            Self::Punarvasu => "પુનર્વસુ",
            Self::Pushya => "પુષ્ય",
            Self::Ashlesha => "આશ્લેષા",
            Self::Magha => "મઘા",
            Self::PurvaPhalguni => "પૂર્વા ફાલ્ગુની",
            Self::UttaraPhalguni => "ઉત્તરા ફાલ્ગુની",
            Self::Hasta => "હસ્ત",
            Self::Chitra => "ચિત્રા",
            Self::Swati => "સ્વાતિ",
            Self::Vishakha => "વિશાખા",
            Self::Anuradha => "અનુરાધા",
            Self::Jyeshtha => "જ્યેષ્ઠા",
            Self::Mula => "મૂળ",
            Self::PurvaAshadha => "પૂર્વાષાઢા",
            Self::UttaraAshadha => "ઉત્તરાષાઢા",
            Self::Shravana => "શ્રવણ",
            Self::Dhanishtha => "ધનિષ્ઠા",
            Self::Shatabhisha => "શતભિષા",
            Self::PurvaBhadrapada => "પૂર્વા ભાદ્રપદ",
            Self::UttaraBhadrapada => "ઉત્તરા ભાદ્રપદ",
            Self::Revati => "રેવતી",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ashwini => 0,
            Self::Bharani => 1,
            Self::Krittika => 2,
            Self::Rohini => 3,
            Self::Mrigashira => 4,
            Self::Ardra => 5,
            Self::Punarvasu => 6,
            Self::Pushya => 7,
            Self::Ashlesha => 8,
            Self::Magha => 9,
            Self::PurvaPhalguni => 10,
            Self::UttaraPhalguni => 11,
            Self::Hasta => 12,
            Self::Chitra => 13,
            Self::Swati => 14,
            Self::Vishakha => 15,
            Self::Anuradha => 16,
            Self::Jyeshtha => 17,
            Self::Mula => 18,
            Self::PurvaAshadha => 19,
            Self::UttaraAshadha => 20,
            Self::Shravana => 21,
            Self::Dhanishtha => 22,
            Self::Shatabhisha => 23,
            Self::PurvaBhadrapada => 24,
            Self::UttaraBhadrapada => 25,
            Self::Revati => 26,
        }
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

/// Full nakshatra classification result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Determine nakshatra and pada from ecliptic longitude.
///
/// The longitude is normalized to [0, 360) first. Each nakshatra spans
/// 13 deg 20'; each pada spans 3 deg 20'.
pub fn nakshatra_from_longitude(lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(lon_deg);
    let nak_idx = (lon / NAKSHATRA_SPAN).floor() as u8;
    // Clamp to 26 in case of floating point edge (exactly 360.0)
    let nak_idx = nak_idx.min(26);
    let degrees_in_nakshatra = lon - (nak_idx as f64) * NAKSHATRA_SPAN;
    let pada_idx = (degrees_in_nakshatra / PADA_SPAN).floor() as u8;
    let pada = pada_idx.min(3) + 1; // 1-based

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[nak_idx as usize],
        nakshatra_index: nak_idx,
        pada,
        degrees_in_nakshatra,
    }
}
