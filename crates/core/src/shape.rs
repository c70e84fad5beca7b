//! Tooth drawing derivation.
//!
//! A pure mapping from one tooth's conditions plus presentational state to
//! the vector geometry a host canvas draws: the outline frame, the five
//! surface regions with their resolved fills, and any overlay glyphs.
//! Nothing here mutates chart data; interaction is exposed through
//! [`hit_test`], which the host maps onto its own tooth/surface click
//! handlers.

use crate::catalog::{ConditionCatalog, OverlaySymbol};
use crate::model::ToothCondition;
use odonto_types::Surface;

/// Outline width of a permanent tooth cell.
pub const BASE_WIDTH: f32 = 30.0;
/// Outline height of a permanent tooth cell.
pub const BASE_HEIGHT: f32 = 40.0;
/// Scale applied to deciduous teeth.
pub const DECIDUOUS_SCALE: f32 = 0.8;

/// Band between the outline and the surface zones; clicks here are
/// whole-tooth clicks.
const OUTLINE_INSET: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// One drawable surface region.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceRegion {
    pub surface: Surface,
    /// Closed polygon in drawing coordinates.
    pub outline: Vec<Point>,
    /// Resolved fill colour; `None` renders transparent.
    pub fill: Option<&'static str>,
    /// Diagonal-stripe overlay on top of the fill.
    pub stripe_pattern: bool,
    /// Distinct stroke for the currently selected surface.
    pub selected: bool,
}

/// Overlay glyphs, in draw order (later entries on top).
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    /// Downward arrow above the outline; `tip` is the lowest point of the
    /// glyph, `height` its vertical extent.
    ArrowDown { tip: Point, height: f32 },
    /// X cross spanning the whole outline.
    CrossX { frame: Rect },
}

/// The derived drawing for one tooth.
#[derive(Debug, Clone, PartialEq)]
pub struct ToothDrawing {
    pub frame: Rect,
    /// Distinct outline stroke for the selected tooth.
    pub selected: bool,
    pub surfaces: Vec<SurfaceRegion>,
    pub overlays: Vec<Overlay>,
}

/// Presentational inputs for one tooth, mirroring the host-UI contract.
#[derive(Debug, Clone)]
pub struct ToothShapeProps<'a> {
    /// Conditions recorded against this tooth only.
    pub conditions: &'a [ToothCondition],
    pub is_selected: bool,
    pub selected_surface: Option<Surface>,
    pub is_deciduous: bool,
}

/// What a point within the drawing maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToothTarget {
    /// The outline band: a whole-tooth interaction.
    Tooth,
    /// A surface zone: a per-surface interaction.
    Surface(Surface),
}

/// Derives the drawing for one tooth from its conditions and selection
/// state.
pub fn render(catalog: &ConditionCatalog, props: &ToothShapeProps<'_>) -> ToothDrawing {
    let scale = if props.is_deciduous {
        DECIDUOUS_SCALE
    } else {
        1.0
    };
    let frame = Rect {
        x: 0.0,
        y: 0.0,
        width: BASE_WIDTH * scale,
        height: BASE_HEIGHT * scale,
    };

    let has_symbol = |symbol: OverlaySymbol| {
        props
            .conditions
            .iter()
            .any(|c| catalog.lookup(&c.condition_code).symbol == Some(symbol))
    };
    let is_missing = has_symbol(OverlaySymbol::CrossX);

    let surfaces = Surface::ALL
        .iter()
        .map(|&surface| {
            // First matching condition wins; no match renders transparent,
            // not the catalog's "none" entry.
            let definition = props
                .conditions
                .iter()
                .find(|c| c.surface == Some(surface))
                .map(|c| catalog.lookup(&c.condition_code));

            let (fill, stripe_pattern) = if is_missing {
                (None, false)
            } else {
                definition
                    .map(|d| (d.fill, d.stripe_pattern))
                    .unwrap_or((None, false))
            };

            SurfaceRegion {
                surface,
                outline: surface_polygon(&frame, scale, surface),
                fill,
                stripe_pattern,
                selected: props.selected_surface == Some(surface),
            }
        })
        .collect();

    let mut overlays = Vec::new();
    if has_symbol(OverlaySymbol::ArrowDown) {
        overlays.push(Overlay::ArrowDown {
            tip: Point {
                x: frame.width / 2.0,
                y: -2.0 * scale,
            },
            height: 8.0 * scale,
        });
    }
    if is_missing {
        // Drawn last so the cross sits on top of everything.
        overlays.push(Overlay::CrossX { frame });
    }

    ToothDrawing {
        frame,
        selected: props.is_selected,
        surfaces,
        overlays,
    }
}

/// Resolves a point in drawing coordinates to an interaction target.
///
/// Points inside a surface zone are per-surface interactions; points on
/// the outline band around the zones are whole-tooth interactions; points
/// outside the frame hit nothing.
pub fn hit_test(drawing: &ToothDrawing, x: f32, y: f32) -> Option<ToothTarget> {
    for region in &drawing.surfaces {
        if polygon_contains(&region.outline, x, y) {
            return Some(ToothTarget::Surface(region.surface));
        }
    }
    if drawing.frame.contains(x, y) {
        return Some(ToothTarget::Tooth);
    }
    None
}

/// The five-zone layout: the occlusal square in the middle quarter insets
/// of the body, with four trapezoids around it. The body is the frame
/// inset by the outline band.
fn surface_polygon(frame: &Rect, scale: f32, surface: Surface) -> Vec<Point> {
    let inset = OUTLINE_INSET * scale;
    let left = frame.x + inset;
    let top = frame.y + inset;
    let right = frame.x + frame.width - inset;
    let bottom = frame.y + frame.height - inset;
    let w = right - left;
    let h = bottom - top;

    let inner_left = left + w / 4.0;
    let inner_top = top + h / 4.0;
    let inner_right = left + 3.0 * w / 4.0;
    let inner_bottom = top + 3.0 * h / 4.0;

    let p = |x: f32, y: f32| Point { x, y };
    match surface {
        Surface::Occlusal => vec![
            p(inner_left, inner_top),
            p(inner_right, inner_top),
            p(inner_right, inner_bottom),
            p(inner_left, inner_bottom),
        ],
        Surface::Mesial => vec![
            p(left, top),
            p(inner_left, inner_top),
            p(inner_left, inner_bottom),
            p(left, bottom),
        ],
        Surface::Distal => vec![
            p(right, top),
            p(right, bottom),
            p(inner_right, inner_bottom),
            p(inner_right, inner_top),
        ],
        Surface::Vestibular => vec![
            p(left, top),
            p(right, top),
            p(inner_right, inner_top),
            p(inner_left, inner_top),
        ],
        Surface::Lingual => vec![
            p(left, bottom),
            p(inner_left, inner_bottom),
            p(inner_right, inner_bottom),
            p(right, bottom),
        ],
    }
}

/// Even-odd ray casting.
fn polygon_contains(points: &[Point], x: f32, y: f32) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);
        if (a.y > y) != (b.y > y) && x < (b.x - a.x) * (y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}
