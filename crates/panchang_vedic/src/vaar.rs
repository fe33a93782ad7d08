//! Vaar (weekday) enumeration and derivation from a Julian Date.
//!
//! Uses the standard civil-calendar rule: day 0 = Sunday .. day 6 =
//! Saturday, applied to the Julian Date of the naive local instant.

/// The 7 vaars (weekdays), Ravivaar (Sunday) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

/// All 7 vaars in order (0 = Ravivaar/Sunday, 6 = Shanivaar/Saturday).
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    /// Sanskrit name of the vaar.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    /// English name of the weekday.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Sunday",
            Self::Somvaar => "Monday",
            Self::Mangalvaar => "Tuesday",
            Self::Budhvaar => "Wednesday",
            Self::Guruvaar => "Thursday",
            Self::Shukravaar => "Friday",
            Self::Shanivaar => "Saturday",
        }
    }

    /// Gujarati-script name, as served to end users.
    pub const fn gujarati_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "રવિવાર",
            Self::Somvaar => "સોમવાર",
            Self::Mangalvaar => "મંગળવાર",
            Self::Budhvaar => "બુધવાર",
            Self::Guruvaar => "ગુરુવાર",
            Self::Shukravaar => "શુક્રવાર",
            Self::Shanivaar => "શનિવાર",
        }
    }

    /// 0-based index (Ravivaar=0 .. Shanivaar=6).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ravivaar => 0,
            Self::Somvaar => 1,
            Self::Mangalvaar => 2,
            Self::Budhvaar => 3,
            Self::Guruvaar => 4,
            Self::Shukravaar => 5,
            Self::Shanivaar => 6,
        }
    }

    /// All 7 vaars in order.
    pub const fn all() -> &'static [Vaar; 7] {
        &ALL_VAARS
    }
}

/// Determine the vaar for a Julian Date.
///
/// `floor(jd + 1.5) mod 7` gives 0 for Sunday. The result is stable across
/// a whole civil day regardless of the time-of-day fraction.
pub fn vaar_from_jd(jd: f64) -> Vaar {
    let day = ((jd + 1.5).floor() as i64).rem_euclid(7) as usize;
    ALL_VAARS[day]
}
