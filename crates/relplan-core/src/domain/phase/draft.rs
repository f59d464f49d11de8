//! In-progress edit drafts

use serde::{Deserialize, Serialize};

use super::entity::BasePhaseRef;

/// User-editable fields of the phase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    StartDate,
    EndDate,
    Color,
}

/// The mutable draft behind one open edit dialog.
///
/// The variant is fixed when the session opens and never changes while the
/// user edits: a base-phase instance keeps its catalog identity and only
/// exposes its dates, so name/color edits cannot exist for it by
/// construction. Dates are held as local-format strings until commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhaseDraft {
    Base {
        /// The catalog entry this phase was instantiated from.
        origin: BasePhaseRef,
        start_date: String,
        end_date: String,
    },
    Custom {
        name: String,
        start_date: String,
        end_date: String,
        color: String,
    },
}

impl PhaseDraft {
    pub fn is_base(&self) -> bool {
        matches!(self, Self::Base { .. })
    }

    /// For a base-phase instance this is the catalog name, not user input.
    pub fn name(&self) -> &str {
        match self {
            Self::Base { origin, .. } => &origin.name,
            Self::Custom { name, .. } => name,
        }
    }

    pub fn color(&self) -> &str {
        match self {
            Self::Base { origin, .. } => &origin.color,
            Self::Custom { color, .. } => color,
        }
    }

    pub fn start_date(&self) -> &str {
        match self {
            Self::Base { start_date, .. } | Self::Custom { start_date, .. } => start_date,
        }
    }

    pub fn end_date(&self) -> &str {
        match self {
            Self::Base { end_date, .. } | Self::Custom { end_date, .. } => end_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_draft_reports_catalog_identity() {
        let draft = PhaseDraft::Base {
            origin: BasePhaseRef {
                name: "QA".to_string(),
                color: "#185ABD".to_string(),
            },
            start_date: "2025-01-01".to_string(),
            end_date: "2025-01-05".to_string(),
        };
        assert!(draft.is_base());
        assert_eq!(draft.name(), "QA");
        assert_eq!(draft.color(), "#185ABD");
        assert_eq!(draft.start_date(), "2025-01-01");
    }

    #[test]
    fn test_custom_draft_accessors() {
        let draft = PhaseDraft::Custom {
            name: "Hardening".to_string(),
            start_date: "2025-02-01".to_string(),
            end_date: "2025-02-10".to_string(),
            color: "#C00000".to_string(),
        };
        assert!(!draft.is_base());
        assert_eq!(draft.name(), "Hardening");
        assert_eq!(draft.end_date(), "2025-02-10");
    }
}
