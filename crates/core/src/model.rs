//! Odontogram data model.
//!
//! These are the records the charting canvas edits and the record service
//! persists. Collections live in an [`OdontogramWorkingCopy`], the single
//! mutable aggregate a session owns; every successful load replaces the
//! working copy wholesale so it always reflects one consistent view of the
//! backend record.

use crate::{OdontogramError, OdontogramResult};
use chrono::{DateTime, Utc};
use odonto_types::{Surface, ToothNumber};
use serde::{Deserialize, Serialize};

/// Identifier of one odontogram record on the record service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OdontogramId(u64);

impl OdontogramId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for OdontogramId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One clinically observed condition at a tooth, optionally scoped to a
/// surface. Surface-less conditions (missing tooth, root canal treatment)
/// apply to the whole tooth. Several conditions may coexist on one tooth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToothCondition {
    pub tooth_number: ToothNumber,
    pub condition_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<Surface>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ToothCondition {
    /// Creates a whole-tooth condition.
    pub fn new(tooth_number: ToothNumber, condition_code: impl Into<String>) -> Self {
        Self {
            tooth_number,
            condition_code: condition_code.into(),
            surface: None,
            note: None,
        }
    }

    /// Scopes the condition to one surface.
    pub fn on_surface(mut self, surface: Surface) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Attaches a free-text clinical note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A prosthetic bridge spanning two or more teeth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToothBridge {
    pub teeth: Vec<ToothNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ToothBridge {
    /// Creates a bridge across the given teeth.
    ///
    /// # Errors
    ///
    /// Returns `OdontogramError::InvalidInput` when fewer than two teeth
    /// are supplied; a bridge connects abutments.
    pub fn new(teeth: Vec<ToothNumber>) -> OdontogramResult<Self> {
        if teeth.len() < 2 {
            return Err(OdontogramError::InvalidInput(
                "a bridge must span at least two teeth".into(),
            ));
        }
        Ok(Self { teeth, note: None })
    }
}

/// A free-form clinical marker attached to a tooth, e.g. a mobility grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToothIndicator {
    pub tooth_number: ToothNumber,
    pub indicator_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// The mutable, in-memory aggregate for one odontogram.
///
/// This is the single surface the UI writes to. It is replaced wholesale on
/// every successful load, never merged field-by-field, so that after a
/// save-and-reload it is guaranteed to match the backend's view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OdontogramWorkingCopy {
    #[serde(default)]
    pub conditions: Vec<ToothCondition>,
    #[serde(default)]
    pub bridges: Vec<ToothBridge>,
    #[serde(default)]
    pub indicators: Vec<ToothIndicator>,
}

impl OdontogramWorkingCopy {
    /// Returns a new working copy with the patch's present collections
    /// replacing the current ones and the absent collections carried over
    /// unchanged. This is the only mutation primitive the session exposes.
    pub fn apply_patch(&self, patch: WorkingCopyPatch) -> Self {
        Self {
            conditions: patch.conditions.unwrap_or_else(|| self.conditions.clone()),
            bridges: patch.bridges.unwrap_or_else(|| self.bridges.clone()),
            indicators: patch.indicators.unwrap_or_else(|| self.indicators.clone()),
        }
    }

    /// All conditions recorded against one tooth, in charting order.
    pub fn conditions_for(&self, tooth: ToothNumber) -> Vec<&ToothCondition> {
        self.conditions
            .iter()
            .filter(|c| c.tooth_number == tooth)
            .collect()
    }
}

/// A shallow patch over the working copy: any subset of the three
/// collections. `None` leaves a collection untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkingCopyPatch {
    pub conditions: Option<Vec<ToothCondition>>,
    pub bridges: Option<Vec<ToothBridge>>,
    pub indicators: Option<Vec<ToothIndicator>>,
}

impl WorkingCopyPatch {
    pub fn conditions(conditions: Vec<ToothCondition>) -> Self {
        Self {
            conditions: Some(conditions),
            ..Self::default()
        }
    }

    pub fn bridges(bridges: Vec<ToothBridge>) -> Self {
        Self {
            bridges: Some(bridges),
            ..Self::default()
        }
    }

    pub fn indicators(indicators: Vec<ToothIndicator>) -> Self {
        Self {
            indicators: Some(indicators),
            ..Self::default()
        }
    }
}

/// Summary statistics the record service returns alongside the canvas
/// data. Display-only: it is kept next to the working copy but never
/// merged into it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OdontogramSummary {
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub examined_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub dmft_total: Option<u32>,
}
