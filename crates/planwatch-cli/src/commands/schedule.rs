//! Lesson plan snapshot commands

use super::{elapsed_ms, CommandContext};
use clap::{Args, Subcommand, ValueEnum};
use planwatch_core::diff::render_human_summary;
use planwatch_core::errors::{ExError, ExErrorKind};
use planwatch_core::render::schedule_notification;
use planwatch_core::snapshot::comparison_to_json;
use planwatch_core::{log_op_end, log_op_error, log_op_start};
use planwatch_store::snapshot::{load_plan, save_plan};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct ScheduleArgs {
    #[command(subcommand)]
    pub command: ScheduleCommand,
}

#[derive(Debug, Subcommand)]
pub enum ScheduleCommand {
    /// Compare a stored snapshot with a freshly captured one
    Compare(CompareArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Array of `{before, after}` records
    Json,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Previously stored snapshot
    #[arg(long)]
    pub old: PathBuf,

    /// Newly captured snapshot
    #[arg(long)]
    pub new: PathBuf,

    /// Only compare lessons on this day (0 = Monday)
    #[arg(long)]
    pub day: Option<u32>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Replace the old snapshot with the new one afterwards
    #[arg(long)]
    pub update: bool,
}

pub fn execute(ctx: &CommandContext, args: ScheduleArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        ScheduleCommand::Compare(compare_args) => execute_compare(ctx, compare_args),
    }
}

fn execute_compare(
    ctx: &CommandContext,
    args: CompareArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let op = "schedule_compare";
    let started = Instant::now();
    log_op_start!(op, request_id = %ctx.request_id);

    match compare(ctx, &args) {
        Ok(delta_count) => {
            log_op_end!(
                op,
                duration_ms = elapsed_ms(started),
                delta_count = delta_count as u64,
                request_id = %ctx.request_id
            );
            Ok(())
        }
        Err(e) => {
            let e = e.with_request_id(ctx.request_id.clone());
            log_op_error!(op, e.clone(), duration_ms = elapsed_ms(started));
            Err(e.into())
        }
    }
}

/// Returns the number of reported deltas
fn compare(ctx: &CommandContext, args: &CompareArgs) -> Result<usize, ExError> {
    let old = load_plan(&args.old)?;
    let new = load_plan(&args.new)?;

    let comparison = match args.day {
        Some(day) => old.filter_by_day(day).compare(&new.filter_by_day(day)),
        None => old.compare(&new),
    };

    match args.format {
        OutputFormat::Text => print!("{}", render_human_summary(&comparison)),
        OutputFormat::Json => println!("{}", comparison_to_json(&comparison)?),
    }

    if let Some(notification) = schedule_notification(&comparison) {
        let handler = ctx.config.build_notification_handler()?;
        handler.handle(&notification).map_err(|e| {
            ExError::new(ExErrorKind::Notification)
                .with_op("schedule_compare")
                .with_message(format!("handler '{}' failed", handler.name()))
                .with_source(e)
        })?;
        tracing::info!(handler = handler.name(), "Schedule change notified");
    }

    if args.update {
        save_plan(&args.old, &new)?;
    }

    Ok(comparison.len())
}
