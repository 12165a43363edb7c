//! planwatch core - lesson plan model and change detection
//!
//! This crate provides the pure, side-effect-free part of planwatch:
//! - Lesson, LessonDelta, LessonPlan and LessonPlanComparison value types
//! - The slot-then-content lesson equality policy
//! - The two-pass schedule diff engine
//! - The JSON snapshot codec
//! - Notification rendering and the notification handler seam
//! - The error and logging facilities shared by the outer crates

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod notify;
pub mod render;
pub mod snapshot;

// Used by the logging macros
pub use planwatch_core_types;

// Re-export commonly used types
pub use diff::compare_plans;
pub use errors::{ExError, ExErrorKind, PlanWatchError, Result};
pub use model::{Lesson, LessonDelta, LessonPlan, LessonPlanComparison, Message};
pub use notify::{Notification, NotificationHandler};
