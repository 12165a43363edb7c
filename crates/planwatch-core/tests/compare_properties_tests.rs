//! Property tests for the comparison engine.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use planwatch_core::model::{DeltaKind, Lesson, LessonPlan, Slot};
use planwatch_core::compare_plans;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn arb_lesson() -> impl Strategy<Value = Lesson> {
    (
        0u32..5,
        0u32..8,
        prop::sample::select(vec!["Math", "Physics", "English", "PE", "German / French"]),
        prop::option::of(prop::sample::select(vec!["Smith", "Jones", "Brown"])),
        prop::option::of(prop::sample::select(vec!["101", "204", "LAB1"])),
    )
        .prop_map(|(day, hour, name, teacher, classroom)| Lesson {
            day,
            hour,
            name: name.to_string(),
            time: format!("{:02}:00-{:02}:45", 8 + hour, 8 + hour),
            teacher: teacher.map(str::to_string),
            classroom: classroom.map(str::to_string),
        })
}

/// Plans that may hold several lessons per slot
fn arb_plan() -> impl Strategy<Value = LessonPlan> {
    prop::collection::vec(arb_lesson(), 0..24).prop_map(LessonPlan::new)
}

/// Plans with at most one lesson per slot
fn arb_single_slot_plan() -> impl Strategy<Value = LessonPlan> {
    prop::collection::vec(arb_lesson(), 0..24).prop_map(|lessons| {
        let by_slot: BTreeMap<Slot, Lesson> =
            lessons.into_iter().map(|l| (l.slot(), l)).collect();
        by_slot.into_values().collect()
    })
}

proptest! {
    #[test]
    fn prop_identity_is_no_change(plan in arb_single_slot_plan()) {
        let comparison = compare_plans(&plan, &plan);
        prop_assert!(!comparison.is_change());
    }

    #[test]
    fn prop_duplicated_identical_lessons_are_no_change(plan in arb_single_slot_plan()) {
        // The same lesson listed twice in a slot still pairs as Equals
        let doubled: LessonPlan = plan.iter().flat_map(|l| [l.clone(), l.clone()]).collect();
        prop_assert!(!compare_plans(&doubled, &doubled).is_change());
    }

    #[test]
    fn prop_pairs_never_cross_slots(old in arb_plan(), new in arb_plan()) {
        for delta in compare_plans(&old, &new).deltas() {
            if let (Some(before), Some(after)) = (delta.before(), delta.after()) {
                prop_assert_eq!(before.slot(), after.slot());
            }
        }
    }

    #[test]
    fn prop_additions_come_last(old in arb_plan(), new in arb_plan()) {
        let kinds: Vec<DeltaKind> = compare_plans(&old, &new)
            .deltas()
            .iter()
            .map(|d| d.kind())
            .collect();
        if let Some(first_added) = kinds.iter().position(|k| *k == DeltaKind::Added) {
            prop_assert!(kinds[first_added..].iter().all(|k| *k == DeltaKind::Added));
        }
    }

    #[test]
    fn prop_every_old_lesson_is_accounted_once(old in arb_plan(), new in arb_plan()) {
        // Pass 1 emits at most one delta per old lesson
        let comparison = compare_plans(&old, &new);
        let counts = comparison.counts();
        prop_assert!(counts.modified + counts.removed <= old.len());
        prop_assert!(counts.added <= new.len());
    }

    #[test]
    fn prop_empty_old_reports_only_additions(new in arb_plan()) {
        let comparison = compare_plans(&LessonPlan::default(), &new);
        prop_assert_eq!(comparison.len(), new.len());
        prop_assert!(comparison.deltas().iter().all(|d| d.kind() == DeltaKind::Added));
    }
}
