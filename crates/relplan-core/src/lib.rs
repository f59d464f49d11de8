//! Relplan Core Library
//!
//! The validation core behind the release-plan phase edit dialog:
//! - Phase entities and edit drafts
//! - Timezone-safe calendar-date normalization
//! - Conflict indices for name/color uniqueness checks
//! - Field validators and the debounced validation coordinator
//! - The edit-session controller and its submission gate

pub mod application;
pub mod domain;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::application::errors::{PhaseFormErrors, ValidationCode};
    pub use crate::application::services::phase_form::{PhaseFormController, PhaseFormOptions};
    pub use crate::domain::dates::DateNormalizer;
    pub use crate::domain::phase::{BasePhaseRef, FormField, PhaseDraft, PlanPhase};
}
