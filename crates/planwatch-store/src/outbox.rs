//! File-based notification handler
//!
//! Writes each notification as a numbered file into an outbox directory,
//! for pickup by whatever delivers mail on the host.

use crate::atomic::atomic_write;
use crate::errors::io_error;
use planwatch_core::errors::{ExError, ExErrorKind};
use planwatch_core::notify::{ContentType, Notification, NotificationHandler};
use std::fs;
use std::path::{Path, PathBuf};

const SLUG_MAX_LEN: usize = 40;

/// Handler that writes `<seq>-<slug>.txt|.html` files into a directory
#[derive(Debug, Clone)]
pub struct OutboxNotificationHandler {
    dir: PathBuf,
    subject_prefix: Option<String>,
}

impl OutboxNotificationHandler {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            subject_prefix: None,
        }
    }

    /// Prepend a fixed prefix to every subject
    pub fn with_subject_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.subject_prefix = Some(prefix.into());
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Prefixed subject, folded onto one header line
    fn subject_for(&self, notification: &Notification) -> String {
        let subject = match &self.subject_prefix {
            Some(prefix) => format!("{}{}", prefix, notification.subject),
            None => notification.subject.clone(),
        };
        subject.replace(['\r', '\n'], " ")
    }

    /// One past the highest sequence number already in the directory
    fn next_sequence(&self) -> std::io::Result<u32> {
        if !self.dir.exists() {
            return Ok(1);
        }

        let mut highest = 0;
        for entry in fs::read_dir(&self.dir)? {
            let name = entry?.file_name();
            let seq = name
                .to_str()
                .and_then(|n| n.split_once('-'))
                .and_then(|(digits, _)| digits.parse::<u32>().ok());
            if let Some(seq) = seq {
                highest = highest.max(seq);
            }
        }
        Ok(highest + 1)
    }
}

/// Lower-case ASCII slug of a subject; `notification` when nothing survives
pub fn slugify(subject: &str) -> String {
    let mut slug = String::new();
    for c in subject.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
        if slug.len() >= SLUG_MAX_LEN {
            break;
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "notification".to_string()
    } else {
        slug.to_string()
    }
}

fn content_type_header(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::Plain => "text/plain; charset=utf-8",
        ContentType::Html => "text/html; charset=utf-8",
    }
}

impl NotificationHandler for OutboxNotificationHandler {
    fn name(&self) -> &str {
        "outbox"
    }

    fn handle(&self, notification: &Notification) -> Result<(), ExError> {
        let wrap = |source: ExError| {
            ExError::new(ExErrorKind::Notification)
                .with_op("outbox_handle")
                .with_entity_id(self.dir.display().to_string())
                .with_message("cannot write notification to outbox")
                .with_source(source)
        };

        let seq = self
            .next_sequence()
            .map_err(|e| wrap(io_error("outbox_scan", e)))?;
        let subject = self.subject_for(notification);
        let file_name = format!(
            "{:04}-{}.{}",
            seq,
            slugify(&notification.subject),
            notification.content_type.extension()
        );
        let path = self.dir.join(file_name);

        let document = format!(
            "Subject: {}\nContent-Type: {}\n\n{}",
            subject,
            content_type_header(notification.content_type),
            notification.body
        );
        atomic_write(&path, document.as_bytes()).map_err(wrap)?;

        tracing::debug!(path = %path.display(), "Notification processed: outbox");
        Ok(())
    }
}
