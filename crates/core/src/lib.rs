//! # Odonto Core
//!
//! Core charting logic for the odontogram canvas:
//! - FDI tooth-number classification and the clinical condition catalog
//! - DMFT index computation over recorded conditions
//! - Derivation of drawable tooth geometry (outline, surfaces, overlays)
//! - The editable working-copy session that loads from and saves to the
//!   clinic record service
//!
//! **No web concerns**: routing, authentication, and page rendering belong
//! to the host application; this crate only speaks the record service's
//! JSON contract through [`client::CanvasApi`].

pub mod catalog;
pub mod client;
pub mod config;
pub mod dmft;
pub mod error;
pub mod fdi;
pub mod model;
pub mod session;
pub mod shape;

pub use catalog::{ClinicalWeight, ConditionCatalog, ConditionDefinition, OverlaySymbol};
pub use client::{CanvasApi, CanvasSnapshot, HttpCanvasApi};
pub use config::CoreConfig;
pub use dmft::{compute_dmft, DmftIndex};
pub use error::{OdontogramError, OdontogramResult};
pub use model::{
    OdontogramId, OdontogramSummary, OdontogramWorkingCopy, ToothBridge, ToothCondition,
    ToothIndicator, WorkingCopyPatch,
};
pub use session::{Notice, NoticeLevel, OdontogramSession, SessionState};
pub use shape::{hit_test, render, ToothDrawing, ToothShapeProps, ToothTarget};
