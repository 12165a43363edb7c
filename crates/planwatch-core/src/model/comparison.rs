use serde::{Deserialize, Serialize};

use super::delta::{DeltaKind, LessonDelta};

/// Number of deltas of each kind in a comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeltaCounts {
    pub modified: usize,
    pub removed: usize,
    pub added: usize,
}

impl DeltaCounts {
    pub fn total(&self) -> usize {
        self.modified + self.removed + self.added
    }
}

/// LessonPlanComparison - the ordered change-set between two plans
///
/// Modifications and removals come first in old-plan order, followed by
/// additions in new-plan order. An empty list means nothing changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonPlanComparison {
    deltas: Vec<LessonDelta>,
}

impl LessonPlanComparison {
    pub fn new(deltas: Vec<LessonDelta>) -> Self {
        Self { deltas }
    }

    pub fn deltas(&self) -> &[LessonDelta] {
        &self.deltas
    }

    pub fn into_deltas(self) -> Vec<LessonDelta> {
        self.deltas
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// True iff at least one delta was found
    pub fn is_change(&self) -> bool {
        !self.deltas.is_empty()
    }

    pub fn counts(&self) -> DeltaCounts {
        self.deltas
            .iter()
            .fold(DeltaCounts::default(), |mut counts, delta| {
                match delta.kind() {
                    DeltaKind::Modified => counts.modified += 1,
                    DeltaKind::Removed => counts.removed += 1,
                    DeltaKind::Added => counts.added += 1,
                }
                counts
            })
    }

    /// Pairwise [`LessonDelta::content_eq`] over equally long change-sets
    pub fn content_eq(&self, other: &LessonPlanComparison) -> bool {
        self.deltas.len() == other.deltas.len()
            && self
                .deltas
                .iter()
                .zip(&other.deltas)
                .all(|(a, b)| a.content_eq(b))
    }
}
