use planwatch_core::{Lesson, LessonPlan};
use std::path::PathBuf;

/// Lesson with a fixed time label, teacher and classroom
#[allow(dead_code)]
pub fn lesson(day: u32, hour: u32, name: &str) -> Lesson {
    Lesson::new(day, hour, name, time_for(hour))
        .with_teacher("Smith")
        .with_classroom("101")
}

/// Time label the fixtures use for a period index
#[allow(dead_code)]
pub fn time_for(hour: u32) -> String {
    let start = 7 * 60 + 10 + hour * 50;
    let end = start + 45;
    format!(
        "{:02}:{:02}-{:02}:{:02}",
        start / 60,
        start % 60,
        end / 60,
        end % 60
    )
}

#[allow(dead_code)]
pub fn plan(lessons: Vec<Lesson>) -> LessonPlan {
    LessonPlan::new(lessons)
}

/// Directory holding JSON comparison fixtures
#[allow(dead_code)]
pub fn comparison_fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("lesson_plan_comparisons")
}
