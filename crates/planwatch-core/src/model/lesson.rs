use serde::{Deserialize, Serialize};

/// Separator the portal uses when several subjects share one period
pub const COMPOSITE_SEPARATOR: &str = " / ";

/// A `(day, hour)` coordinate identifying one period in the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    pub day: u32,
    pub hour: u32,
}

/// Lesson - one class occurrence in a week
///
/// Several lessons may occupy the same slot (elective blocks reported as
/// separate entries), so a slot is not a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Day of the week, 0 = Monday
    pub day: u32,

    /// Period index within the day; not necessarily contiguous
    pub hour: u32,

    /// Subject name, possibly several joined with [`COMPOSITE_SEPARATOR`]
    pub name: String,

    /// Time-range label exactly as shown by the portal (opaque)
    pub time: String,

    pub teacher: Option<String>,

    pub classroom: Option<String>,
}

impl Lesson {
    /// Create a lesson without teacher or classroom
    pub fn new(day: u32, hour: u32, name: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            day,
            hour,
            name: name.into(),
            time: time.into(),
            teacher: None,
            classroom: None,
        }
    }

    /// Set the teacher
    pub fn with_teacher(mut self, teacher: impl Into<String>) -> Self {
        self.teacher = Some(teacher.into());
        self
    }

    /// Set the classroom
    pub fn with_classroom(mut self, classroom: impl Into<String>) -> Self {
        self.classroom = Some(classroom.into());
        self
    }

    /// The slot this lesson occupies
    pub fn slot(&self) -> Slot {
        Slot {
            day: self.day,
            hour: self.hour,
        }
    }

    /// Individual subject names of a composite period
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.name.split(COMPOSITE_SEPARATOR)
    }
}

/// Three-valued result of comparing two lessons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonCompareResult {
    /// Same slot, differing content
    Different,
    /// Same slot, identical content
    Equals,
    /// Different slot; the lessons are unrelated
    Other,
}

/// Compare two lessons under the slot-then-content policy
///
/// Lessons in different slots are never related. Within a slot, content is an
/// exact match on `(time, name, teacher, classroom)`; any single differing
/// field makes them `Different`.
pub fn compare_lessons(a: &Lesson, b: &Lesson) -> LessonCompareResult {
    if a.slot() != b.slot() {
        return LessonCompareResult::Other;
    }

    let same_content = a.time == b.time
        && a.name == b.name
        && a.teacher == b.teacher
        && a.classroom == b.classroom;

    if same_content {
        LessonCompareResult::Equals
    } else {
        LessonCompareResult::Different
    }
}
