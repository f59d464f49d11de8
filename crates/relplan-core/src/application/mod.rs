//! Application layer
//!
//! Validation errors, conflict indices, field validators and the services
//! that orchestrate one edit session.

pub mod errors;
pub mod services;
pub mod validators;

pub use errors::{PhaseFormErrors, ValidationCode};
