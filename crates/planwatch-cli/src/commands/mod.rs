pub mod messages;
pub mod schedule;

use crate::config::PlanWatchConfig;
use planwatch_core::errors::ExError;
use planwatch_core_types::RequestId;
use planwatch_store::errors::{io_error, not_found};
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

/// Shared state of one CLI run
pub struct CommandContext {
    pub config: PlanWatchConfig,
    pub request_id: RequestId,
}

impl CommandContext {
    pub fn new(config: PlanWatchConfig) -> Self {
        Self {
            config,
            request_id: RequestId::new(),
        }
    }
}

/// Read an input file, mapping a missing file to `NotFound`
fn read_input(op: &str, path: &Path) -> Result<Vec<u8>, ExError> {
    std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => not_found(op, &path.display().to_string()),
        _ => io_error(op, e).with_entity_id(path.display().to_string()),
    })
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
