//! Inbox message commands

use super::{elapsed_ms, read_input, CommandContext};
use clap::{Args, Subcommand};
use planwatch_core::errors::ExError;
use planwatch_core::snapshot::parse_messages_bytes;
use planwatch_core::{log_op_end, log_op_error, log_op_start};
use planwatch_store::db::open_messages_db;
use planwatch_store::messages::{dispatch_notifications, sync_messages};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct MessagesArgs {
    #[command(subcommand)]
    pub command: MessagesCommand,
}

#[derive(Debug, Subcommand)]
pub enum MessagesCommand {
    /// Store newly captured messages and notify about unseen ones
    Sync(SyncArgs),
}

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// JSON array of captured messages
    #[arg(long)]
    pub input: PathBuf,

    /// Message database; overrides `storage.messages_db_path`
    #[arg(long)]
    pub db: Option<PathBuf>,
}

pub fn execute(ctx: &CommandContext, args: MessagesArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        MessagesCommand::Sync(sync_args) => execute_sync(ctx, sync_args),
    }
}

fn execute_sync(ctx: &CommandContext, args: SyncArgs) -> Result<(), Box<dyn std::error::Error>> {
    let op = "messages_sync";
    let started = Instant::now();
    log_op_start!(op, request_id = %ctx.request_id);

    match sync(ctx, &args) {
        Ok(notified) => {
            log_op_end!(
                op,
                duration_ms = elapsed_ms(started),
                notified = notified as u64,
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

/// Returns the number of messages notified
fn sync(ctx: &CommandContext, args: &SyncArgs) -> Result<usize, ExError> {
    // Fail on a bad handler config before touching the database
    let handler = ctx.config.build_notification_handler()?;

    let messages = parse_messages_bytes(&read_input("messages_sync", &args.input)?)?;
    let db_path = args
        .db
        .clone()
        .unwrap_or_else(|| ctx.config.storage.messages_db_path.clone());

    let mut conn = open_messages_db(&db_path)?;
    let report = sync_messages(&mut conn, &messages)?;
    let notified = dispatch_notifications(&conn, handler.as_ref())?;

    println!(
        "Captured {} messages: {} new, {} already stored, {} notified",
        messages.len(),
        report.inserted,
        report.skipped,
        notified
    );
    Ok(notified)
}
