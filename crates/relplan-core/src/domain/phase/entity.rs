//! Phase entities

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix marking a phase id that has not been persisted yet.
pub const PROVISIONAL_ID_PREFIX: &str = "local-";

/// A phase placed inside a release plan.
///
/// Dates are UTC calendar-date strings (`YYYY-MM-DD`) with
/// `end_date >= start_date`. Within one plan no two phases may share a name
/// (case-insensitive, trimmed) or a color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanPhase {
    /// Stable identity; new phases carry a provisional id until persisted.
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    /// Canonical hex string; unique across base phases and plan phases.
    pub color: String,
}

impl PlanPhase {
    /// Mint an id for a phase that has not been saved server-side yet.
    pub fn provisional_id() -> String {
        format!("{PROVISIONAL_ID_PREFIX}{}", Uuid::new_v4())
    }

    pub fn is_provisional(&self) -> bool {
        self.id.starts_with(PROVISIONAL_ID_PREFIX)
    }
}

/// Read-only entry from the global base-phase catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasePhaseRef {
    pub name: String,
    pub color: String,
}
