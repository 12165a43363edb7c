//! Snapshot files on disk
//!
//! A snapshot file holds one captured lesson plan in the JSON snapshot
//! format. Saving goes through [`atomic_write`](crate::atomic::atomic_write)
//! so an interrupted run never leaves a truncated snapshot behind.

use crate::atomic::atomic_write;
use crate::errors::{io_error, not_found, Result};
use planwatch_core::model::LessonPlan;
use planwatch_core::snapshot::{parse_plan_bytes, plan_to_json};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load a lesson plan snapshot
///
/// # Errors
///
/// - `NotFound` when the file does not exist
/// - `Io` on other read failures
/// - `InvalidSnapshot` when the content is not a valid snapshot
pub fn load_plan(path: &Path) -> Result<LessonPlan> {
    let entity = path.display().to_string();
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => not_found("load_plan", &entity),
        _ => io_error("load_plan", e).with_entity_id(entity.clone()),
    })?;

    let plan = parse_plan_bytes(&bytes).map_err(|e| e.with_entity_id(entity.clone()))?;
    tracing::debug!(path = %entity, lessons = plan.len(), "Loaded snapshot");
    Ok(plan)
}

/// Save a lesson plan snapshot, replacing any existing file atomically
///
/// # Errors
///
/// - `Serialization` when the plan cannot be encoded
/// - `Io` when the file cannot be written
pub fn save_plan(path: &Path, plan: &LessonPlan) -> Result<()> {
    let mut json = plan_to_json(plan)?;
    json.push('\n');
    atomic_write(path, json.as_bytes())
        .map_err(|e| e.with_entity_id(path.display().to_string()))?;
    tracing::debug!(path = %path.display(), lessons = plan.len(), "Saved snapshot");
    Ok(())
}
