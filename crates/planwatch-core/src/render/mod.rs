//! Notification rendering.
//!
//! Turns comparisons and inbox messages into [`Notification`](crate::notify::Notification)s.

pub mod message;
pub mod schedule;

pub use message::{message_notification, render_message_html};
pub use schedule::{schedule_notification, SCHEDULE_CHANGED_SUBJECT};
