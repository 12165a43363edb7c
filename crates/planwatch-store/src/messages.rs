//! Message inbox persistence and notification dispatch
//!
//! Messages are keyed by their portal id. A message is stored once; its
//! `notified_at` column stays NULL until a notification for it has been
//! handed to a [`NotificationHandler`].

use crate::errors::{from_rusqlite, not_found, Result};
use chrono::{Local, NaiveDateTime};
use planwatch_core::errors::{ExError, ExErrorKind};
use planwatch_core::model::message::portal_datetime;
use planwatch_core::model::Message;
use planwatch_core::notify::NotificationHandler;
use planwatch_core::render::message_notification;
use rusqlite::{params, Connection, Row};

/// Outcome of a [`sync_messages`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Messages stored by this call
    pub inserted: usize,
    /// Messages whose id was already stored (or repeated in the batch)
    pub skipped: usize,
}

/// Store every message whose id is not yet known
///
/// Runs in a single transaction; either all new messages are stored or none.
///
/// # Errors
///
/// `Persistence` on any SQLite failure.
pub fn sync_messages(conn: &mut Connection, messages: &[Message]) -> Result<SyncReport> {
    let created_at = portal_datetime::format(&Local::now().naive_local());
    let mut report = SyncReport::default();

    let tx = conn.transaction().map_err(from_rusqlite)?;
    {
        let mut stmt = tx
            .prepare(
                "INSERT OR IGNORE INTO messages
                    (id, content, created_at, sender, subject, sent_at, notified_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULL)",
            )
            .map_err(from_rusqlite)?;

        for message in messages {
            let changed = stmt
                .execute(params![
                    message.message_id,
                    message.content,
                    created_at,
                    message.sender,
                    message.subject,
                    portal_datetime::format(&message.sent_at),
                ])
                .map_err(from_rusqlite)?;

            if changed == 0 {
                report.skipped += 1;
            } else {
                report.inserted += 1;
                tracing::info!(message_id = %message.message_id, "Added message");
            }
        }
    }
    tx.commit().map_err(from_rusqlite)?;

    tracing::info!(
        captured = messages.len(),
        inserted = report.inserted,
        skipped = report.skipped,
        "Synced messages"
    );
    Ok(report)
}

/// Raw `messages` row: id, content, sender, sent_at, subject
type MessageRow = (String, String, String, String, String);

fn read_row(row: &Row<'_>) -> rusqlite::Result<MessageRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
}

/// Messages not yet notified, ordered by send time then id
///
/// # Errors
///
/// `Persistence` on SQLite failure or when a stored `sent_at` is unreadable.
pub fn pending_notifications(conn: &Connection) -> Result<Vec<Message>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, content, sender, sent_at, subject
             FROM messages
             WHERE notified_at IS NULL
             ORDER BY sent_at, id",
        )
        .map_err(from_rusqlite)?;

    let rows = stmt
        .query_map([], read_row)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    rows.into_iter()
        .map(|(message_id, content, sender, raw_sent_at, subject)| {
            let sent_at = portal_datetime::parse(&raw_sent_at).ok_or_else(|| {
                ExError::new(ExErrorKind::Persistence)
                    .with_op("pending_notifications")
                    .with_entity_id(message_id.clone())
                    .with_message(format!("stored sent_at is unreadable: {}", raw_sent_at))
            })?;
            Ok(Message {
                message_id,
                sender,
                subject,
                sent_at,
                content,
            })
        })
        .collect()
}

/// Record that a message has been notified
///
/// # Errors
///
/// `NotFound` when no message has this id, `Persistence` on SQLite failure.
pub fn mark_notified(conn: &Connection, message_id: &str, at: NaiveDateTime) -> Result<()> {
    let changed = conn
        .execute(
            "UPDATE messages SET notified_at = ?1 WHERE id = ?2",
            params![portal_datetime::format(&at), message_id],
        )
        .map_err(from_rusqlite)?;

    if changed == 0 {
        return Err(not_found("mark_notified", message_id));
    }
    Ok(())
}

/// Hand every pending message to the handler and mark it notified
///
/// Messages are processed in [`pending_notifications`] order. Processing stops
/// at the first handler failure; messages handled before it stay marked.
/// Returns the number of messages notified.
///
/// # Errors
///
/// `Notification` wrapping the handler's error, or `Persistence` on SQLite
/// failure.
pub fn dispatch_notifications(
    conn: &Connection,
    handler: &dyn NotificationHandler,
) -> Result<usize> {
    let pending = pending_notifications(conn)?;
    let mut notified = 0;

    for message in &pending {
        handler.handle(&message_notification(message)).map_err(|e| {
            ExError::new(ExErrorKind::Notification)
                .with_op("dispatch_notifications")
                .with_entity_id(message.message_id.clone())
                .with_message(format!("handler '{}' failed", handler.name()))
                .with_source(e)
        })?;

        mark_notified(conn, &message.message_id, Local::now().naive_local())?;
        notified += 1;
        tracing::info!(
            message_id = %message.message_id,
            handler = handler.name(),
            "Processed notification"
        );
    }

    Ok(notified)
}
