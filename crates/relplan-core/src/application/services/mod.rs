//! Application services
//!
//! Orchestration for one edit session: the debounce coordinator and the
//! form controller with its submission gate.

pub mod debounce;
pub mod phase_form;

pub use debounce::DebounceTimer;
pub use phase_form::{PhaseFormController, PhaseFormOptions};
