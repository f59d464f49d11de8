//! Phase edit session
//!
//! Owns the draft, the error map, the conflict index and the debounce timer
//! for one open dialog. Reopening the dialog for a different phase means
//! building a new controller; the old one's pending check can then never
//! write into the new draft.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::application::errors::{PhaseFormErrors, ValidationCode};
use crate::application::services::debounce::{DebounceTimer, DEFAULT_DEBOUNCE};
use crate::application::validators::{ConflictIndex, PhaseValidator};
use crate::domain::dates::{self, DateNormalizer};
use crate::domain::phase::{BasePhaseRef, FormField, PhaseClassifier, PhaseDraft, PlanPhase};

/// Tunables for an edit session.
#[derive(Debug, Clone)]
pub struct PhaseFormOptions {
    /// Quiet period before an edited name is checked for conflicts.
    pub debounce: Duration,
    /// Color seeded into a brand-new phase draft.
    pub default_color: String,
    /// Days between the default start and end dates of a new phase.
    pub default_span_days: i64,
}

impl Default for PhaseFormOptions {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            default_color: "#9CA3AF".to_string(),
            default_span_days: 7,
        }
    }
}

/// Gate deciding whether the save action is enabled.
///
/// A base-phase instance only needs its dates present and clean. A custom
/// phase additionally needs name and color clean and no name check still in
/// flight, so a duplicate the debounce has not caught yet can never slip
/// through.
pub fn submission_allowed(
    draft: &PhaseDraft,
    errors: &PhaseFormErrors,
    is_validating: bool,
) -> bool {
    let dates_present =
        !draft.start_date().trim().is_empty() && !draft.end_date().trim().is_empty();
    let dates_clean = errors.dates_clean();
    match draft {
        PhaseDraft::Base { .. } => dates_present && dates_clean,
        PhaseDraft::Custom { name, .. } => {
            !name.trim().is_empty()
                && dates_present
                && dates_clean
                && errors.name.is_none()
                && errors.color.is_none()
                && !is_validating
        }
    }
}

/// Controller for one phase edit session.
pub struct PhaseFormController {
    catalog: Vec<BasePhaseRef>,
    plan_phases: Vec<PlanPhase>,
    editing_id: Option<String>,
    draft: PhaseDraft,
    errors: PhaseFormErrors,
    index: ConflictIndex,
    debounce: DebounceTimer,
    normalizer: DateNormalizer,
    touched: bool,
}

impl PhaseFormController {
    /// Opens an edit session.
    ///
    /// `phase_being_edited = None` creates a new phase with a draft seeded
    /// to `today` through `today + default_span_days`. An existing phase is
    /// classified once, here: if its `(name, color)` match a catalog entry
    /// it becomes a base-phase draft whose identity stays read-only for the
    /// whole session.
    pub fn open(
        catalog: Vec<BasePhaseRef>,
        plan_phases: Vec<PlanPhase>,
        phase_being_edited: Option<&PlanPhase>,
        today: NaiveDate,
        normalizer: DateNormalizer,
        options: PhaseFormOptions,
    ) -> Self {
        let editing_id = phase_being_edited.map(|phase| phase.id.clone());
        let draft = match phase_being_edited {
            Some(phase) => {
                let start_date = normalizer
                    .utc_to_local(&phase.start_date)
                    .unwrap_or_else(|| phase.start_date.clone());
                let end_date = normalizer
                    .utc_to_local(&phase.end_date)
                    .unwrap_or_else(|| phase.end_date.clone());
                if PhaseClassifier::is_base_phase_instance(phase, &catalog) {
                    PhaseDraft::Base {
                        origin: BasePhaseRef {
                            name: phase.name.clone(),
                            color: phase.color.clone(),
                        },
                        start_date,
                        end_date,
                    }
                } else {
                    PhaseDraft::Custom {
                        name: phase.name.clone(),
                        start_date,
                        end_date,
                        color: phase.color.clone(),
                    }
                }
            }
            None => {
                let start_date = dates::format_date(today);
                let end_date = dates::add_days(&start_date, options.default_span_days)
                    .unwrap_or_else(|| start_date.clone());
                PhaseDraft::Custom {
                    name: String::new(),
                    start_date,
                    end_date,
                    color: options.default_color.clone(),
                }
            }
        };
        let index = ConflictIndex::build(&catalog, &plan_phases, editing_id.as_deref());
        debug!(
            editing_id = editing_id.as_deref().unwrap_or("<new>"),
            base = draft.is_base(),
            "edit session opened"
        );
        Self {
            catalog,
            plan_phases,
            editing_id,
            draft,
            errors: PhaseFormErrors::default(),
            index,
            debounce: DebounceTimer::new(options.debounce),
            normalizer,
            touched: false,
        }
    }

    pub fn draft(&self) -> &PhaseDraft {
        &self.draft
    }

    pub fn errors(&self) -> &PhaseFormErrors {
        &self.errors
    }

    /// True while a debounced name check is scheduled but has not fired.
    pub fn is_validating(&self) -> bool {
        self.debounce.is_pending()
    }

    pub fn is_form_valid(&self) -> bool {
        submission_allowed(&self.draft, &self.errors, self.is_validating())
    }

    /// Applies a field edit and triggers its validation policy: name edits
    /// are debounced, color and date edits validate synchronously. Edits to
    /// the read-only fields of a base-phase instance are ignored.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>, now: Instant) {
        let value = value.into();
        match (&mut self.draft, field) {
            (PhaseDraft::Base { .. }, FormField::Name | FormField::Color) => {
                trace!(?field, "ignoring edit to read-only field of a base phase");
                return;
            }
            (PhaseDraft::Base { start_date, .. }, FormField::StartDate) => *start_date = value,
            (PhaseDraft::Base { end_date, .. }, FormField::EndDate) => *end_date = value,
            (PhaseDraft::Custom { name, .. }, FormField::Name) => *name = value,
            (PhaseDraft::Custom { color, .. }, FormField::Color) => *color = value,
            (PhaseDraft::Custom { start_date, .. }, FormField::StartDate) => *start_date = value,
            (PhaseDraft::Custom { end_date, .. }, FormField::EndDate) => *end_date = value,
        }
        self.touched = true;
        self.run_field_validation(field, now);
    }

    /// Fires a due debounced name check. Call from the host's tick/idle
    /// handler; a no-op while the quiet period is still running.
    pub fn poll(&mut self, now: Instant) {
        if let Some(value) = self.debounce.fire_due(now) {
            trace!(value = %value, "debounced name check fired");
            self.errors.name = PhaseValidator::validate_name(&value, &self.index);
        }
    }

    /// Accepts refreshed snapshots of the catalog and the plan's phases.
    /// The conflict index is rebuilt; classification keeps reflecting the
    /// phase as it was when the session opened.
    pub fn refresh_collections(&mut self, catalog: Vec<BasePhaseRef>, plan_phases: Vec<PlanPhase>) {
        self.catalog = catalog;
        self.plan_phases = plan_phases;
        self.index =
            ConflictIndex::build(&self.catalog, &self.plan_phases, self.editing_id.as_deref());
    }

    /// Validates and commits the draft.
    ///
    /// Runs the full pass synchronously so a save issued inside the
    /// debounce window cannot bypass the name check, then normalizes the
    /// dates to UTC and builds the final phase. A base-phase instance is
    /// forced back to its catalog name and color.
    pub fn save(&mut self) -> Result<PlanPhase, PhaseFormErrors> {
        self.debounce.cancel();
        self.errors = match &self.draft {
            PhaseDraft::Base { .. } => PhaseValidator::validate_base_phase(&self.draft),
            PhaseDraft::Custom { .. } => {
                PhaseValidator::validate_local_phase(&self.draft, &self.index)
            }
        };
        if !self.errors.is_empty() {
            debug!(errors = ?self.errors, "save rejected by validation");
            return Err(self.errors);
        }

        let start_utc = self.normalizer.local_to_utc(self.draft.start_date());
        let end_utc = self.normalizer.local_to_utc(self.draft.end_date());
        if start_utc.is_none() {
            self.errors.start_date = Some(ValidationCode::InvalidDate);
        }
        if end_utc.is_none() {
            self.errors.end_date = Some(ValidationCode::InvalidDate);
        }
        let (Some(start_date), Some(end_date)) = (start_utc, end_utc) else {
            debug!(errors = ?self.errors, "save rejected: date normalization failed");
            return Err(self.errors);
        };

        let id = self
            .editing_id
            .clone()
            .unwrap_or_else(PlanPhase::provisional_id);
        let phase = match &self.draft {
            // The catalog identity wins over anything left in the draft.
            PhaseDraft::Base { origin, .. } => PlanPhase {
                id,
                name: origin.name.clone(),
                start_date,
                end_date,
                color: origin.color.clone(),
            },
            PhaseDraft::Custom { name, color, .. } => PlanPhase {
                id,
                name: name.trim().to_string(),
                start_date,
                end_date,
                color: color.clone(),
            },
        };

        // Safety net; unreachable when the passes above succeeded.
        if phase.name.is_empty() {
            self.errors.name = Some(ValidationCode::Required);
        }
        if phase.start_date.is_empty() {
            self.errors.start_date = Some(ValidationCode::Required);
        }
        if phase.end_date.is_empty() {
            self.errors.end_date = Some(ValidationCode::Required);
        }
        if !self.errors.is_empty() {
            debug!(errors = ?self.errors, "save rejected by final re-check");
            return Err(self.errors);
        }

        debug!(phase_id = %phase.id, provisional = phase.is_provisional(), "phase accepted");
        Ok(phase)
    }

    /// Abandons the session. Safe to call mid-debounce; the pending check
    /// is discarded and can never fire.
    pub fn cancel(&mut self) {
        if self.debounce.cancel() {
            trace!("pending name check discarded on cancel");
        }
    }

    fn run_field_validation(&mut self, field: FormField, now: Instant) {
        if !self.touched {
            return;
        }
        match field {
            FormField::Name => {
                self.debounce.schedule(self.draft.name().to_string(), now);
            }
            FormField::Color => {
                self.errors.color = PhaseValidator::validate_color(self.draft.color(), &self.index);
            }
            FormField::StartDate | FormField::EndDate => {
                let start = self.draft.start_date();
                let end = self.draft.end_date();
                if start.trim().is_empty() && end.trim().is_empty() {
                    self.errors.clear_dates();
                } else {
                    PhaseValidator::validate_dates(start, end).apply_to(&mut self.errors);
                }
            }
        }
    }
}
