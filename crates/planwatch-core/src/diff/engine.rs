//! Lesson plan comparison engine.
//!
//! The core entry point is [`compare_plans`]. It is a pure function: no I/O,
//! no shared state, and it cannot fail for well-formed plans.

use crate::model::{
    compare_lessons, LessonCompareResult, LessonDelta, LessonPlan, LessonPlanComparison,
};

/// Compare an old plan against a new one.
///
/// Two independent passes:
///
/// 1. For every old lesson, in order, take the first new lesson sharing its
///    slot. `Equals` means unchanged; `Different` yields a modification and the
///    scan stops there. No lesson in the slot at all yields a removal.
/// 2. For every new lesson, in order, emit an addition when no old lesson
///    shares its slot.
///
/// Pairing is first-hit in list order, not a best-content matching. When a
/// slot holds several lessons on either side (elective blocks) the pairing
/// follows list order and may not be the one a reader would pick; every old
/// lesson in such a slot pairs with the first new lesson there. This is kept
/// as-is because notifications depend on it.
pub fn compare_plans(old: &LessonPlan, new: &LessonPlan) -> LessonPlanComparison {
    let mut deltas = Vec::new();

    // Modified and removed lessons
    for before in old {
        let first_in_slot = new
            .iter()
            .map(|after| (after, compare_lessons(before, after)))
            .find(|(_, result)| *result != LessonCompareResult::Other);

        match first_in_slot {
            Some((_, LessonCompareResult::Equals)) => {}
            Some((after, _)) => {
                deltas.push(LessonDelta::modified(before.clone(), after.clone()))
            }
            None => deltas.push(LessonDelta::removed(before.clone())),
        }
    }

    // Added lessons
    for after in new {
        let slot_known = old
            .iter()
            .any(|before| compare_lessons(before, after) != LessonCompareResult::Other);
        if !slot_known {
            deltas.push(LessonDelta::added(after.clone()));
        }
    }

    let comparison = LessonPlanComparison::new(deltas);
    let counts = comparison.counts();
    // Field names mirror planwatch_core_types::schema
    tracing::debug!(
        old_len = old.len(),
        new_len = new.len(),
        delta_count = counts.total(),
        modified = counts.modified,
        removed = counts.removed,
        added = counts.added,
        "Compared lesson plans"
    );

    comparison
}
