//! Phase domain types

pub mod classify;
pub mod draft;
pub mod entity;

pub use classify::PhaseClassifier;
pub use draft::{FormField, PhaseDraft};
pub use entity::{BasePhaseRef, PlanPhase, PROVISIONAL_ID_PREFIX};
