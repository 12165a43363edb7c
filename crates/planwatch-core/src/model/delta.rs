use serde::{Deserialize, Serialize};

use super::lesson::{compare_lessons, Lesson, LessonCompareResult};
use crate::errors::{PlanWatchError, Result};

/// What a delta reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaKind {
    /// Same slot, different content
    Modified,
    /// Present only in the old plan
    Removed,
    /// Present only in the new plan
    Added,
}

/// A single reported change between two lesson plans
///
/// At least one side is always present. Deserialization enforces this
/// as well, so a stored `{before: null, after: null}` record is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "DeltaRecord")]
pub struct LessonDelta {
    before: Option<Lesson>,
    after: Option<Lesson>,
}

/// Wire shape of a delta; `lesson-1` / `lesson-2` are the legacy key names
#[derive(Deserialize)]
struct DeltaRecord {
    #[serde(default, alias = "lesson-1")]
    before: Option<Lesson>,
    #[serde(default, alias = "lesson-2")]
    after: Option<Lesson>,
}

impl TryFrom<DeltaRecord> for LessonDelta {
    type Error = PlanWatchError;

    fn try_from(record: DeltaRecord) -> Result<Self> {
        LessonDelta::new(record.before, record.after)
    }
}

impl LessonDelta {
    /// Create a delta from optional sides
    ///
    /// # Errors
    ///
    /// Returns [`PlanWatchError::InvalidDelta`] when both sides are absent.
    pub fn new(before: Option<Lesson>, after: Option<Lesson>) -> Result<Self> {
        if before.is_none() && after.is_none() {
            return Err(PlanWatchError::InvalidDelta);
        }
        Ok(Self { before, after })
    }

    /// A lesson whose content changed within its slot
    pub fn modified(before: Lesson, after: Lesson) -> Self {
        Self {
            before: Some(before),
            after: Some(after),
        }
    }

    /// A lesson that disappeared from the plan
    pub fn removed(before: Lesson) -> Self {
        Self {
            before: Some(before),
            after: None,
        }
    }

    /// A lesson that appeared in the plan
    pub fn added(after: Lesson) -> Self {
        Self {
            before: None,
            after: Some(after),
        }
    }

    pub fn before(&self) -> Option<&Lesson> {
        self.before.as_ref()
    }

    pub fn after(&self) -> Option<&Lesson> {
        self.after.as_ref()
    }

    pub fn kind(&self) -> DeltaKind {
        match (&self.before, &self.after) {
            (Some(_), Some(_)) => DeltaKind::Modified,
            (Some(_), None) => DeltaKind::Removed,
            // new() and the named constructors rule out (None, None)
            (None, _) => DeltaKind::Added,
        }
    }

    /// Content equality of two deltas
    ///
    /// Each side must be absent on both deltas, or present on both and
    /// compare as [`LessonCompareResult::Equals`].
    pub fn content_eq(&self, other: &LessonDelta) -> bool {
        side_eq(self.before(), other.before()) && side_eq(self.after(), other.after())
    }
}

fn side_eq(a: Option<&Lesson>, b: Option<&Lesson>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => compare_lessons(a, b) == LessonCompareResult::Equals,
        (None, None) => true,
        _ => false,
    }
}
