//! Human-readable summary renderer for lesson plan comparisons.

use crate::model::{DeltaKind, Lesson, LessonDelta, LessonPlanComparison};

const DAYS: [&str; 7] = [
    "MONDAY",
    "TUESDAY",
    "WEDNESDAY",
    "THURSDAY",
    "FRIDAY",
    "SATURDAY",
    "SUNDAY",
];

/// Upper-case English day name for a 0-based day index
pub fn day_name(day: u32) -> Option<&'static str> {
    DAYS.get(day as usize).copied()
}

/// Render a plain-text summary of a [`LessonPlanComparison`].
///
/// One line per delta, in change-set order: `~` modified, `-` removed,
/// `+` added. Used as the body of the schedule change notification.
pub fn render_human_summary(comparison: &LessonPlanComparison) -> String {
    if !comparison.is_change() {
        return "No changes.\n".to_string();
    }

    let counts = comparison.counts();
    let mut out = format!(
        "Lesson plan changes ({} modified, {} removed, {} added)\n\n",
        counts.modified, counts.removed, counts.added
    );

    for delta in comparison.deltas() {
        out.push_str(&render_delta(delta));
        out.push('\n');
    }

    out
}

fn render_delta(delta: &LessonDelta) -> String {
    match (delta.kind(), delta.before(), delta.after()) {
        (DeltaKind::Modified, Some(before), Some(after)) => {
            let mut line = format!(
                "~ {}: {} → {}",
                slot_label(before),
                describe(before),
                describe(after)
            );
            if after.time != before.time {
                line.push_str(&format!(" [now {}]", after.time));
            }
            line
        }
        (_, Some(before), None) => format!("- {}: {}", slot_label(before), describe(before)),
        (_, None, Some(after)) => format!("+ {}: {}", slot_label(after), describe(after)),
        // LessonDelta guarantees one side
        _ => String::new(),
    }
}

fn slot_label(lesson: &Lesson) -> String {
    let day = match day_name(lesson.day) {
        Some(name) => name.to_string(),
        None => format!("DAY {}", lesson.day),
    };
    format!("{}, lesson {} ({})", day, lesson.hour, lesson.time)
}

fn describe(lesson: &Lesson) -> String {
    let details: Vec<&str> = [lesson.teacher.as_deref(), lesson.classroom.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();
    if details.is_empty() {
        lesson.name.clone()
    } else {
        format!("{} ({})", lesson.name, details.join(", "))
    }
}
