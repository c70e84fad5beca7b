//! The clinical condition catalog.
//!
//! A fixed table of condition codes with the metadata the renderer and the
//! DMFT calculator need. The catalog is built once at startup and passed by
//! reference into whatever consumes it; there is no module-level state.
//!
//! Lookup is permissive on purpose: the record service may introduce codes
//! this build does not know, and an unknown code must render neutrally
//! rather than break the canvas.

/// How a condition counts towards the DMFT index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClinicalWeight {
    Decayed,
    Missing,
    Filled,
}

/// Overlay glyph a condition adds to the tooth drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlaySymbol {
    /// Downward arrow above the tooth (root canal treatment).
    ArrowDown,
    /// Full-tooth X cross (missing tooth).
    CrossX,
}

/// Rendering and index metadata for one condition code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionDefinition {
    pub code: &'static str,
    pub label: &'static str,
    /// Surface fill colour, if the condition paints the surface at all.
    pub fill: Option<&'static str>,
    /// Diagonal-stripe overlay on top of the base fill (composite).
    pub stripe_pattern: bool,
    pub symbol: Option<OverlaySymbol>,
    pub weight: Option<ClinicalWeight>,
}

const NEUTRAL: ConditionDefinition = ConditionDefinition {
    code: "",
    label: "Unrecognised condition",
    fill: None,
    stripe_pattern: false,
    symbol: None,
    weight: None,
};

/// Immutable condition table keyed by condition code.
#[derive(Debug, Clone)]
pub struct ConditionCatalog {
    entries: Vec<ConditionDefinition>,
}

impl ConditionCatalog {
    /// The standard charting catalog.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                ConditionDefinition {
                    code: "car",
                    label: "Caries",
                    fill: Some("#b22222"),
                    stripe_pattern: false,
                    symbol: None,
                    weight: Some(ClinicalWeight::Decayed),
                },
                ConditionDefinition {
                    code: "amf",
                    label: "Amalgam filling",
                    fill: Some("#3f3f3f"),
                    stripe_pattern: false,
                    symbol: None,
                    weight: Some(ClinicalWeight::Filled),
                },
                ConditionDefinition {
                    code: "cof",
                    label: "Composite filling",
                    fill: Some("#ffffff"),
                    stripe_pattern: true,
                    symbol: None,
                    weight: Some(ClinicalWeight::Filled),
                },
                ConditionDefinition {
                    code: "sea",
                    label: "Fissure sealant",
                    fill: Some("#7fb069"),
                    stripe_pattern: false,
                    symbol: None,
                    weight: None,
                },
                ConditionDefinition {
                    code: "rct",
                    label: "Root canal treatment",
                    fill: None,
                    stripe_pattern: false,
                    symbol: Some(OverlaySymbol::ArrowDown),
                    weight: None,
                },
                ConditionDefinition {
                    code: "nvt",
                    label: "Non-vital tooth",
                    fill: Some("#d8d8d8"),
                    stripe_pattern: false,
                    symbol: None,
                    weight: None,
                },
                ConditionDefinition {
                    code: "fmc",
                    label: "Full metal crown",
                    fill: Some("#8c8c8c"),
                    stripe_pattern: false,
                    symbol: None,
                    weight: Some(ClinicalWeight::Filled),
                },
                ConditionDefinition {
                    code: "poc",
                    label: "Porcelain crown",
                    fill: Some("#f3ead9"),
                    stripe_pattern: false,
                    symbol: None,
                    weight: Some(ClinicalWeight::Filled),
                },
                ConditionDefinition {
                    code: "mis",
                    label: "Missing tooth",
                    fill: None,
                    stripe_pattern: false,
                    symbol: Some(OverlaySymbol::CrossX),
                    weight: Some(ClinicalWeight::Missing),
                },
                ConditionDefinition {
                    code: "non",
                    label: "No condition",
                    fill: None,
                    stripe_pattern: false,
                    symbol: None,
                    weight: None,
                },
            ],
        }
    }

    /// Looks up a condition code.
    ///
    /// Total: unknown codes resolve to a neutral definition (no fill, no
    /// pattern, no symbol, no weight) so callers never special-case a
    /// missing entry.
    pub fn lookup(&self, code: &str) -> &ConditionDefinition {
        self.entries
            .iter()
            .find(|def| def.code == code)
            .unwrap_or(&NEUTRAL)
    }

    /// All known definitions, in catalog order.
    pub fn definitions(&self) -> &[ConditionDefinition] {
        &self.entries
    }
}
