use crate::diff::render_human_summary;
use crate::model::LessonPlanComparison;
use crate::notify::Notification;

pub const SCHEDULE_CHANGED_SUBJECT: &str = "Lesson plan changed";

/// Build the schedule change notification, or `None` when nothing changed
pub fn schedule_notification(comparison: &LessonPlanComparison) -> Option<Notification> {
    if !comparison.is_change() {
        return None;
    }
    Some(Notification::plain(
        SCHEDULE_CHANGED_SUBJECT,
        render_human_summary(comparison),
    ))
}
