//! Phase edit validators
//!
//! Pure predicate-and-code functions over the draft and the conflict
//! indices.

pub mod conflict_index;
pub mod phase_validator;

pub use conflict_index::ConflictIndex;
pub use phase_validator::{DateErrors, PhaseValidator};
