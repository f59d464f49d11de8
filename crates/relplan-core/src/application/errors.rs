//! Validation errors
//!
//! Validation outcomes are data keyed by form field, never exceptions; the
//! dialog layer renders them next to the offending input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::phase::FormField;

/// Why a field is currently invalid. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationCode {
    #[error("This field is required")]
    Required,
    #[error("Another phase in this plan already uses this name")]
    DuplicateName,
    #[error("This color is already used by a base phase or another phase in this plan")]
    DuplicateColor,
    #[error("End date must not be before the start date")]
    EndBeforeStart,
    #[error("Not a valid calendar date")]
    InvalidDate,
}

/// Current error state of the form, one optional code per key.
///
/// Absence means the field is valid. Each validator fully owns its keys, so
/// the map is never partially stale after a validation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseFormErrors {
    pub name: Option<ValidationCode>,
    pub start_date: Option<ValidationCode>,
    pub end_date: Option<ValidationCode>,
    /// Cross-field ordering error; set only when both dates are present.
    pub date_range: Option<ValidationCode>,
    pub color: Option<ValidationCode>,
}

impl PhaseFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.date_range.is_none()
            && self.color.is_none()
    }

    /// Error attached directly to an editable field. The cross-field
    /// `date_range` key is exposed as its own struct field.
    pub fn get(&self, field: FormField) -> Option<ValidationCode> {
        match field {
            FormField::Name => self.name,
            FormField::StartDate => self.start_date,
            FormField::EndDate => self.end_date,
            FormField::Color => self.color,
        }
    }

    /// User-facing message for a field, if it is currently invalid.
    pub fn message(&self, field: FormField) -> Option<String> {
        self.get(field).map(|code| code.to_string())
    }

    pub fn dates_clean(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none() && self.date_range.is_none()
    }

    pub fn clear_dates(&mut self) {
        self.start_date = None;
        self.end_date = None;
        self.date_range = None;
    }
}
