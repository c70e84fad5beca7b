//! DMFT clinical index computation.

use crate::catalog::{ClinicalWeight, ConditionCatalog};
use crate::model::ToothCondition;
use odonto_types::ToothNumber;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Decayed/Missing/Filled teeth counts. The total is derived, never
/// stored, so `t = d + m + f` holds by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DmftIndex {
    pub decayed: u32,
    pub missing: u32,
    pub filled: u32,
}

impl DmftIndex {
    pub fn total(self) -> u32 {
        self.decayed + self.missing + self.filled
    }
}

impl std::fmt::Display for DmftIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "D={} M={} F={} T={}",
            self.decayed,
            self.missing,
            self.filled,
            self.total()
        )
    }
}

/// Computes the DMFT index over a condition list, counting each tooth at
/// most once.
///
/// The FIRST condition encountered for a tooth (in input order) decides
/// its classification; later conditions on the same tooth are ignored for
/// index purposes, including weightless ones having already marked the
/// tooth as counted. Existing clinical reports depend on exactly this
/// tie-break, so it is preserved as-is even though the result is
/// order-dependent when a tooth carries both a decayed and a filled
/// surface.
pub fn compute_dmft(catalog: &ConditionCatalog, conditions: &[ToothCondition]) -> DmftIndex {
    let mut counted: HashSet<ToothNumber> = HashSet::new();
    let mut index = DmftIndex::default();

    for condition in conditions {
        if !counted.insert(condition.tooth_number) {
            continue;
        }
        match catalog.lookup(&condition.condition_code).weight {
            Some(ClinicalWeight::Decayed) => index.decayed += 1,
            Some(ClinicalWeight::Missing) => index.missing += 1,
            Some(ClinicalWeight::Filled) => index.filled += 1,
            None => {}
        }
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use odonto_types::Surface;

    fn tooth(n: u8) -> ToothNumber {
        ToothNumber::new(n).expect("test tooth should be valid")
    }

    #[test]
    fn empty_input_yields_a_zero_index() {
        let catalog = ConditionCatalog::standard();
        let index = compute_dmft(&catalog, &[]);
        assert_eq!(index, DmftIndex::default());
        assert_eq!(index.total(), 0);
    }

    #[test]
    fn first_condition_per_tooth_wins_the_classification() {
        let catalog = ConditionCatalog::standard();
        let conditions = vec![
            ToothCondition::new(tooth(11), "car").on_surface(Surface::Mesial),
            ToothCondition::new(tooth(11), "amf").on_surface(Surface::Occlusal),
        ];
        let index = compute_dmft(&catalog, &conditions);
        assert_eq!(
            index,
            DmftIndex {
                decayed: 1,
                missing: 0,
                filled: 0
            }
        );
        assert_eq!(index.total(), 1);
    }

    #[test]
    fn weightless_first_condition_still_marks_the_tooth_counted() {
        let catalog = ConditionCatalog::standard();
        let conditions = vec![
            ToothCondition::new(tooth(21), "rct"),
            ToothCondition::new(tooth(21), "car").on_surface(Surface::Distal),
        ];
        let index = compute_dmft(&catalog, &conditions);
        assert_eq!(index, DmftIndex::default());
    }

    #[test]
    fn distinct_teeth_accumulate_across_classes() {
        let catalog = ConditionCatalog::standard();
        let conditions = vec![
            ToothCondition::new(tooth(16), "car").on_surface(Surface::Occlusal),
            ToothCondition::new(tooth(26), "mis"),
            ToothCondition::new(tooth(36), "cof").on_surface(Surface::Occlusal),
            ToothCondition::new(tooth(46), "fmc"),
            ToothCondition::new(tooth(11), "non"),
        ];
        let index = compute_dmft(&catalog, &conditions);
        assert_eq!(
            index,
            DmftIndex {
                decayed: 1,
                missing: 1,
                filled: 2
            }
        );
        assert_eq!(index.total(), 4);
    }

    #[test]
    fn unknown_codes_count_nothing_but_consume_the_tooth() {
        let catalog = ConditionCatalog::standard();
        let conditions = vec![
            ToothCondition::new(tooth(14), "mystery"),
            ToothCondition::new(tooth(14), "mis"),
        ];
        let index = compute_dmft(&catalog, &conditions);
        assert_eq!(index, DmftIndex::default());
    }
}
