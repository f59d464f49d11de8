//! Phase classification
//!
//! Decides whether a phase is an instance of a catalog base phase or a
//! custom phase local to one plan.

use super::entity::{BasePhaseRef, PlanPhase};

/// Classifier for phases entering an edit session.
pub struct PhaseClassifier;

impl PhaseClassifier {
    /// True iff the phase's `(name, color)` exactly match a catalog entry.
    ///
    /// Evaluated once when the dialog opens, against the phase as it existed
    /// at that moment. In-progress edits to the draft never re-classify.
    pub fn is_base_phase_instance(phase: &PlanPhase, catalog: &[BasePhaseRef]) -> bool {
        catalog
            .iter()
            .any(|base| base.name == phase.name && base.color == phase.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<BasePhaseRef> {
        vec![
            BasePhaseRef {
                name: "QA".to_string(),
                color: "#185ABD".to_string(),
            },
            BasePhaseRef {
                name: "Rollout".to_string(),
                color: "#00B050".to_string(),
            },
        ]
    }

    fn phase(name: &str, color: &str) -> PlanPhase {
        PlanPhase {
            id: "1".to_string(),
            name: name.to_string(),
            start_date: "2025-01-01".to_string(),
            end_date: "2025-01-05".to_string(),
            color: color.to_string(),
        }
    }

    #[test]
    fn test_exact_match_is_base_instance() {
        assert!(PhaseClassifier::is_base_phase_instance(
            &phase("QA", "#185ABD"),
            &catalog()
        ));
    }

    #[test]
    fn test_name_or_color_mismatch_is_custom() {
        // Same name, different color: a custom phase that borrowed the label.
        assert!(!PhaseClassifier::is_base_phase_instance(
            &phase("QA", "#FF0000"),
            &catalog()
        ));
        assert!(!PhaseClassifier::is_base_phase_instance(
            &phase("Testing", "#185ABD"),
            &catalog()
        ));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let p = phase("Rollout", "#00B050");
        let c = catalog();
        let first = PhaseClassifier::is_base_phase_instance(&p, &c);
        let second = PhaseClassifier::is_base_phase_instance(&p, &c);
        assert_eq!(first, second);
        assert!(first);
    }

    #[test]
    fn test_empty_catalog_is_custom() {
        assert!(!PhaseClassifier::is_base_phase_instance(
            &phase("QA", "#185ABD"),
            &[]
        ));
    }
}
