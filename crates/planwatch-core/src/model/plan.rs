use serde::{Deserialize, Serialize};

use super::comparison::LessonPlanComparison;
use super::lesson::Lesson;
use crate::diff::engine::compare_plans;

/// LessonPlan - an ordered collection of lessons for one week
///
/// Serializes as a bare JSON array of lesson records, which is the
/// snapshot format stored between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonPlan {
    lessons: Vec<Lesson>,
}

impl LessonPlan {
    pub fn new(lessons: Vec<Lesson>) -> Self {
        Self { lessons }
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn into_lessons(self) -> Vec<Lesson> {
        self.lessons
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Lesson> {
        self.lessons.iter()
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Lessons on the given day, in their original order
    pub fn filter_by_day(&self, day: u32) -> LessonPlan {
        self.lessons
            .iter()
            .filter(|lesson| lesson.day == day)
            .cloned()
            .collect()
    }

    /// Compare this (old) plan against a newer one
    ///
    /// See [`compare_plans`] for the pairing rules.
    pub fn compare(&self, new: &LessonPlan) -> LessonPlanComparison {
        compare_plans(self, new)
    }
}

impl FromIterator<Lesson> for LessonPlan {
    fn from_iter<I: IntoIterator<Item = Lesson>>(iter: I) -> Self {
        Self {
            lessons: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Lesson>> for LessonPlan {
    fn from(lessons: Vec<Lesson>) -> Self {
        Self::new(lessons)
    }
}

impl<'a> IntoIterator for &'a LessonPlan {
    type Item = &'a Lesson;
    type IntoIter = std::slice::Iter<'a, Lesson>;

    fn into_iter(self) -> Self::IntoIter {
        self.lessons.iter()
    }
}
