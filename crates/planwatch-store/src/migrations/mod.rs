//! Migration framework
//!
//! Provides:
//! - Migration runner recording a SHA-256 checksum per applied migration
//! - Idempotent application, with drift detection on re-run
//! - Embedded SQL migrations

mod checksums;
mod embedded;
mod runner;

pub use checksums::compute_checksum;
pub use embedded::{get_migrations, Migration};
pub use runner::{apply_migration_set, apply_migrations, applied_migrations};
