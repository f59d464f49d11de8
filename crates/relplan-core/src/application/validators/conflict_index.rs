//! Conflict indices
//!
//! Derived lookup sets for O(1) uniqueness checks while the user types.
//! Rebuilt whenever the caller refreshes its collections; no caching.

use std::collections::HashSet;

use crate::domain::phase::{BasePhaseRef, PlanPhase};

/// Names and colors already taken, excluding the phase under edit.
#[derive(Debug, Clone, Default)]
pub struct ConflictIndex {
    used_colors: HashSet<String>,
    existing_names: HashSet<String>,
}

impl ConflictIndex {
    /// Pure function of the catalog, the plan's phases and the id of the
    /// phase being edited (`None` for a new phase).
    ///
    /// Base-phase names recur across plans by design and are not name
    /// conflicts; colors conflict across both catalogs because color is the
    /// only visual disambiguator on the shared calendar view.
    pub fn build(
        catalog: &[BasePhaseRef],
        plan_phases: &[PlanPhase],
        editing_id: Option<&str>,
    ) -> Self {
        let mut used_colors = HashSet::new();
        let mut existing_names = HashSet::new();

        for base in catalog {
            used_colors.insert(base.color.clone());
        }
        for phase in plan_phases {
            if editing_id.is_some_and(|id| id == phase.id) {
                continue;
            }
            used_colors.insert(phase.color.clone());
            existing_names.insert(normalize_name(&phase.name));
        }

        Self {
            used_colors,
            existing_names,
        }
    }

    /// Colors are canonical hex strings; comparison is exact.
    pub fn color_in_use(&self, color: &str) -> bool {
        self.used_colors.contains(color)
    }

    /// Name comparison is case-insensitive on the trimmed value.
    pub fn name_in_use(&self, name: &str) -> bool {
        self.existing_names.contains(&normalize_name(name))
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
