//! Lesson plan diff engine.
//!
//! Compares an old and a new weekly lesson plan and produces an ordered
//! change-set suitable for a human-readable notification.
//!
//! ## Entry point
//!
//! ```
//! use planwatch_core::diff::{compare_plans, render_human_summary};
//! use planwatch_core::model::{Lesson, LessonPlan};
//!
//! let old = LessonPlan::new(vec![Lesson::new(0, 1, "Math", "08:00-08:45")]);
//! let new = LessonPlan::new(vec![Lesson::new(0, 1, "Art", "08:00-08:45")]);
//! let comparison = compare_plans(&old, &new);
//! assert!(comparison.is_change());
//! let summary = render_human_summary(&comparison);
//! assert!(summary.contains("Art"));
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical change-sets.
//! - **Slot isolation**: a delta never pairs lessons from different `(day, hour)` slots.
//! - **Stable ordering**: modifications and removals in old-plan order, then additions
//!   in new-plan order.

pub mod engine;
pub mod human_summary;

pub use engine::compare_plans;
pub use human_summary::{day_name, render_human_summary};
