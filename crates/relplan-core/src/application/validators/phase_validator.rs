//! Phase field validation
//!
//! Validates the edit draft against the conflict indices and the date
//! ordering rules.

use super::conflict_index::ConflictIndex;
use crate::application::errors::{PhaseFormErrors, ValidationCode};
use crate::domain::phase::PhaseDraft;

/// Outcome of the date checks; the validator owns exactly these three keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateErrors {
    pub start_date: Option<ValidationCode>,
    pub end_date: Option<ValidationCode>,
    pub date_range: Option<ValidationCode>,
}

impl DateErrors {
    pub fn apply_to(self, errors: &mut PhaseFormErrors) {
        errors.start_date = self.start_date;
        errors.end_date = self.end_date;
        errors.date_range = self.date_range;
    }
}

/// Validator for phase edits.
pub struct PhaseValidator;

impl PhaseValidator {
    /// Rules:
    /// - Must not be empty after trimming
    /// - Must not collide with another phase name in the same plan
    pub fn validate_name(name: &str, index: &ConflictIndex) -> Option<ValidationCode> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Some(ValidationCode::Required);
        }
        if index.name_in_use(trimmed) {
            return Some(ValidationCode::DuplicateName);
        }
        None
    }

    /// Rules:
    /// - Must not collide with a base-phase color or another plan phase's
    ///   color
    pub fn validate_color(color: &str, index: &ConflictIndex) -> Option<ValidationCode> {
        index
            .color_in_use(color)
            .then_some(ValidationCode::DuplicateColor)
    }

    /// Rules:
    /// - Both dates are required
    /// - When both are present, the end must not precede the start;
    ///   lexicographic compare is correct for `YYYY-MM-DD` strings
    ///
    /// The three keys are independent; several may be set at once.
    pub fn validate_dates(start_date: &str, end_date: &str) -> DateErrors {
        let start = start_date.trim();
        let end = end_date.trim();
        let mut errors = DateErrors::default();
        if start.is_empty() {
            errors.start_date = Some(ValidationCode::Required);
        }
        if end.is_empty() {
            errors.end_date = Some(ValidationCode::Required);
        }
        if !start.is_empty() && !end.is_empty() && end < start {
            errors.date_range = Some(ValidationCode::EndBeforeStart);
        }
        errors
    }

    /// Full pass for a base-phase instance: name and color come from the
    /// catalog and are not user-editable, so only the dates are checked.
    pub fn validate_base_phase(draft: &PhaseDraft) -> PhaseFormErrors {
        let mut errors = PhaseFormErrors::default();
        Self::validate_dates(draft.start_date(), draft.end_date()).apply_to(&mut errors);
        errors
    }

    /// Full pass for a custom phase: every field is checked.
    pub fn validate_local_phase(draft: &PhaseDraft, index: &ConflictIndex) -> PhaseFormErrors {
        let mut errors = PhaseFormErrors::default();
        errors.name = Self::validate_name(draft.name(), index);
        errors.color = Self::validate_color(draft.color(), index);
        Self::validate_dates(draft.start_date(), draft.end_date()).apply_to(&mut errors);
        errors
    }
}
