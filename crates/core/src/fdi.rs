//! FDI tooth-number classification.
//!
//! The functions here are the permissive tier of tooth handling: they are
//! total over raw `u8` values so that rendering and statistics code can
//! classify whatever the record service sends without failing. The
//! validated tier is [`odonto_types::ToothNumber`], which data entry goes
//! through before a condition ever exists.

use odonto_types::ToothNumber;

/// A charting quadrant. Quadrants 1-4 are the permanent dentition,
/// 5-8 the deciduous dentition over the same physical regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    Q1,
    Q2,
    Q3,
    Q4,
    Q5,
    Q6,
    Q7,
    Q8,
}

impl Quadrant {
    /// The quadrant digit as charted (1-8).
    pub fn digit(self) -> u8 {
        match self {
            Quadrant::Q1 => 1,
            Quadrant::Q2 => 2,
            Quadrant::Q3 => 3,
            Quadrant::Q4 => 4,
            Quadrant::Q5 => 5,
            Quadrant::Q6 => 6,
            Quadrant::Q7 => 7,
            Quadrant::Q8 => 8,
        }
    }

    /// True for the deciduous quadrants 5-8.
    pub fn is_deciduous(self) -> bool {
        self.digit() >= 5
    }

    /// Maps deciduous quadrants onto the physical region they share with
    /// the permanent dentition (5→1, 6→2, 7→3, 8→4); identity for 1-4.
    pub fn logical(self) -> Quadrant {
        match self {
            Quadrant::Q5 => Quadrant::Q1,
            Quadrant::Q6 => Quadrant::Q2,
            Quadrant::Q7 => Quadrant::Q3,
            Quadrant::Q8 => Quadrant::Q4,
            other => other,
        }
    }
}

/// Anatomical tooth class, derived from position within the quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToothType {
    Incisor,
    Canine,
    Premolar,
    Molar,
    Unknown,
}

impl ToothType {
    pub fn label(self) -> &'static str {
        match self {
            ToothType::Incisor => "Incisor",
            ToothType::Canine => "Canine",
            ToothType::Premolar => "Premolar",
            ToothType::Molar => "Molar",
            ToothType::Unknown => "Unknown",
        }
    }
}

/// True iff `value` lies inside one of the eight FDI bands.
pub fn is_valid_tooth(value: u8) -> bool {
    ToothNumber::new(value).is_ok()
}

/// Classifies the quadrant of a raw tooth number.
///
/// Returns `None` for values outside the FDI bands; callers must treat
/// `None` as "cannot classify", not as a failure.
pub fn quadrant(value: u8) -> Option<Quadrant> {
    if !is_valid_tooth(value) {
        return None;
    }
    match value / 10 {
        1 => Some(Quadrant::Q1),
        2 => Some(Quadrant::Q2),
        3 => Some(Quadrant::Q3),
        4 => Some(Quadrant::Q4),
        5 => Some(Quadrant::Q5),
        6 => Some(Quadrant::Q6),
        7 => Some(Quadrant::Q7),
        8 => Some(Quadrant::Q8),
        _ => None,
    }
}

/// True iff `value` charts a deciduous tooth (51-85 bands).
pub fn is_deciduous(value: u8) -> bool {
    matches!(value, 51..=55 | 61..=65 | 71..=75 | 81..=85)
}

/// True iff `value` charts a permanent tooth (11-48 bands).
pub fn is_permanent(value: u8) -> bool {
    matches!(value, 11..=18 | 21..=28 | 31..=38 | 41..=48)
}

/// Anatomical class of a tooth, a pure function of position within the
/// quadrant (`value % 10`), independent of dentition.
pub fn tooth_type(value: u8) -> ToothType {
    match value % 10 {
        1 | 2 => ToothType::Incisor,
        3 => ToothType::Canine,
        4 | 5 => ToothType::Premolar,
        6 | 7 | 8 => ToothType::Molar,
        _ => ToothType::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_matches_the_eight_bands_over_the_full_two_digit_range() {
        for value in 0u8..=99 {
            let in_band = matches!(
                value,
                11..=18 | 21..=28 | 31..=38 | 41..=48 | 51..=55 | 61..=65 | 71..=75 | 81..=85
            );
            assert_eq!(
                is_valid_tooth(value),
                in_band,
                "validity disagrees for tooth {value}"
            );
        }
    }

    #[test]
    fn deciduous_and_permanent_partition_the_valid_teeth() {
        for value in 0u8..=99 {
            if is_valid_tooth(value) {
                assert!(
                    is_deciduous(value) ^ is_permanent(value),
                    "tooth {value} must be exactly one dentition"
                );
            } else {
                assert!(!is_deciduous(value) && !is_permanent(value));
            }
        }
    }

    #[test]
    fn quadrant_is_none_for_unclassifiable_input() {
        assert_eq!(quadrant(0), None);
        assert_eq!(quadrant(19), None);
        assert_eq!(quadrant(90), None);
        assert_eq!(quadrant(16), Some(Quadrant::Q1));
        assert_eq!(quadrant(85), Some(Quadrant::Q8));
    }

    #[test]
    fn deciduous_quadrants_map_to_their_physical_region() {
        assert_eq!(quadrant(55).map(Quadrant::logical), Some(Quadrant::Q1));
        assert_eq!(quadrant(65).map(Quadrant::logical), Some(Quadrant::Q2));
        assert_eq!(quadrant(75).map(Quadrant::logical), Some(Quadrant::Q3));
        assert_eq!(quadrant(85).map(Quadrant::logical), Some(Quadrant::Q4));
        assert_eq!(quadrant(31).map(Quadrant::logical), Some(Quadrant::Q3));
    }

    #[test]
    fn tooth_type_follows_position_within_quadrant() {
        assert_eq!(tooth_type(16), ToothType::Molar);
        assert_eq!(tooth_type(41), ToothType::Incisor);
        assert_eq!(tooth_type(33), ToothType::Canine);
        assert_eq!(tooth_type(54), ToothType::Premolar);
        assert_eq!(tooth_type(12), ToothType::Incisor);
        assert_eq!(tooth_type(48), ToothType::Molar);
        assert_eq!(tooth_type(10), ToothType::Unknown);
        assert_eq!(tooth_type(30), ToothType::Unknown);
    }
}
