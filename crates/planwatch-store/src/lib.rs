//! planwatch store - persistence for snapshots and the message inbox
//!
//! Provides:
//! - Atomic snapshot file load/save
//! - SQLite message inbox with an embedded, checksummed migration set
//! - Notification dispatch for pending inbox messages
//! - The outbox notification handler (one file per notification)

pub mod atomic;
pub mod db;
pub mod errors;
pub mod messages;
pub mod migrations;
pub mod outbox;
pub mod snapshot;

// Re-export key types
pub use errors::Result;
pub use messages::SyncReport;
pub use outbox::OutboxNotificationHandler;
