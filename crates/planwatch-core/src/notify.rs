//! Notification handler seam.
//!
//! Renderers produce [`Notification`] values; a [`NotificationHandler`]
//! delivers them. The core ships only the no-op handler, delivering ones
//! live in outer crates.

use crate::errors::ExError;

/// Body format of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Plain,
    Html,
}

impl ContentType {
    /// File extension used when a notification is written to disk
    pub fn extension(&self) -> &'static str {
        match self {
            ContentType::Plain => "txt",
            ContentType::Html => "html",
        }
    }
}

/// A rendered message ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub body: String,
    pub content_type: ContentType,
}

impl Notification {
    pub fn plain(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            content_type: ContentType::Plain,
        }
    }

    pub fn html(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            content_type: ContentType::Html,
        }
    }
}

/// Delivers notifications somewhere a human will see them
pub trait NotificationHandler {
    /// Name used in configuration (`notification_handler = "..."`)
    fn name(&self) -> &str;

    /// Deliver one notification
    ///
    /// # Errors
    ///
    /// Returns a `Notification` kind error when delivery fails.
    fn handle(&self, notification: &Notification) -> Result<(), ExError>;
}

/// Handler that only logs and drops notifications
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotificationHandler;

impl NotificationHandler for NoopNotificationHandler {
    fn name(&self) -> &str {
        "noop"
    }

    fn handle(&self, notification: &Notification) -> Result<(), ExError> {
        tracing::debug!(
            subject = %notification.subject,
            body_len = notification.body.len(),
            "Notification processed: noop"
        );
        Ok(())
    }
}
