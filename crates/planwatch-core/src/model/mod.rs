pub mod comparison;
pub mod delta;
pub mod lesson;
pub mod message;
pub mod plan;

pub use comparison::{DeltaCounts, LessonPlanComparison};
pub use delta::{DeltaKind, LessonDelta};
pub use lesson::{compare_lessons, Lesson, LessonCompareResult, Slot, COMPOSITE_SEPARATOR};
pub use message::Message;
pub use plan::LessonPlan;
