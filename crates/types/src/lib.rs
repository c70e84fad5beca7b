//! Validated domain scalars shared across the odontogram crates.
//!
//! The types in this crate guarantee their invariants at construction time,
//! so downstream code can accept them without re-checking. Wire boundaries
//! (JSON from the record service, CLI arguments) go through the same
//! constructors via the custom serde implementations.

/// Errors that can occur when creating validated dental scalar types.
#[derive(Debug, thiserror::Error)]
pub enum ToothError {
    /// The value is not inside any of the eight FDI tooth-number bands.
    #[error("tooth number {0} is outside the FDI bands (11-18, 21-28, 31-38, 41-48, 51-55, 61-65, 71-75, 81-85)")]
    OutOfRange(u8),
    /// The surface letter was not one of M, O, D, V, L.
    #[error("unknown tooth surface {0:?} (expected one of M, O, D, V, L)")]
    UnknownSurface(String),
}

/// A two-digit FDI tooth number guaranteed to lie inside a valid band.
///
/// FDI notation encodes quadrant and position in one two-digit number:
/// 11-18, 21-28, 31-38, 41-48 for the permanent dentition and 51-55,
/// 61-65, 71-75, 81-85 for the deciduous dentition. Construction rejects
/// anything else, so a `ToothNumber` held by clinical data-entry code is
/// always chartable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToothNumber(u8);

impl ToothNumber {
    /// Creates a new `ToothNumber` from a raw two-digit value.
    ///
    /// # Errors
    ///
    /// Returns `ToothError::OutOfRange` when the value is not inside one of
    /// the eight FDI bands.
    pub fn new(value: u8) -> Result<Self, ToothError> {
        if Self::in_band(value) {
            Ok(Self(value))
        } else {
            Err(ToothError::OutOfRange(value))
        }
    }

    /// Returns the raw two-digit FDI value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the quadrant digit (1-8, the tens digit).
    pub fn quadrant_digit(self) -> u8 {
        self.0 / 10
    }

    /// Returns the position-within-quadrant digit (the units digit).
    pub fn position_digit(self) -> u8 {
        self.0 % 10
    }

    fn in_band(value: u8) -> bool {
        matches!(
            value,
            11..=18 | 21..=28 | 31..=38 | 41..=48 | 51..=55 | 61..=65 | 71..=75 | 81..=85
        )
    }
}

impl std::fmt::Display for ToothNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for ToothNumber {
    type Error = ToothError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl serde::Serialize for ToothNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for ToothNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        ToothNumber::new(value).map_err(serde::de::Error::custom)
    }
}

/// One of the five conventional tooth faces.
///
/// Wire form is the single letter used by the record service: `M`, `O`,
/// `D`, `V`, `L`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Surface {
    #[serde(rename = "M")]
    Mesial,
    #[serde(rename = "O")]
    Occlusal,
    #[serde(rename = "D")]
    Distal,
    #[serde(rename = "V")]
    Vestibular,
    #[serde(rename = "L")]
    Lingual,
}

impl Surface {
    /// All five surfaces in the conventional charting order.
    pub const ALL: [Surface; 5] = [
        Surface::Mesial,
        Surface::Occlusal,
        Surface::Distal,
        Surface::Vestibular,
        Surface::Lingual,
    ];

    /// Returns the single-letter wire form.
    pub fn letter(self) -> &'static str {
        match self {
            Surface::Mesial => "M",
            Surface::Occlusal => "O",
            Surface::Distal => "D",
            Surface::Vestibular => "V",
            Surface::Lingual => "L",
        }
    }
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.letter())
    }
}

impl std::str::FromStr for Surface {
    type Err = ToothError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Surface::Mesial),
            "O" => Ok(Surface::Occlusal),
            "D" => Ok(Surface::Distal),
            "V" => Ok(Surface::Vestibular),
            "L" => Ok(Surface::Lingual),
            other => Err(ToothError::UnknownSurface(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_permanent_and_deciduous_band_edges() {
        for value in [11u8, 18, 21, 28, 31, 38, 41, 48, 51, 55, 61, 65, 71, 75, 81, 85] {
            assert!(
                ToothNumber::new(value).is_ok(),
                "tooth {value} should be accepted"
            );
        }
    }

    #[test]
    fn rejects_values_between_and_outside_bands() {
        for value in [0u8, 10, 19, 20, 29, 30, 49, 50, 56, 60, 66, 76, 80, 86, 99] {
            let err = ToothNumber::new(value).expect_err("value should be rejected");
            assert!(matches!(err, ToothError::OutOfRange(v) if v == value));
        }
    }

    #[test]
    fn digits_split_quadrant_and_position() {
        let tooth = ToothNumber::new(47).expect("47 is a valid molar");
        assert_eq!(tooth.quadrant_digit(), 4);
        assert_eq!(tooth.position_digit(), 7);
        assert_eq!(tooth.to_string(), "47");
    }

    #[test]
    fn deserialising_an_invalid_tooth_fails() {
        let err = serde_json::from_str::<ToothNumber>("59").expect_err("59 is not chartable");
        assert!(err.to_string().contains("FDI"));
    }

    #[test]
    fn surface_round_trips_through_wire_letters() {
        for surface in Surface::ALL {
            let json = serde_json::to_string(&surface).expect("surface should serialise");
            assert_eq!(json, format!("\"{}\"", surface.letter()));
            let back: Surface = serde_json::from_str(&json).expect("surface should parse");
            assert_eq!(back, surface);
        }
        assert!("X".parse::<Surface>().is_err());
    }
}
