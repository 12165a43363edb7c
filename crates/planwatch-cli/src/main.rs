//! planwatch CLI
//!
//! Compares captured lesson plan snapshots and syncs captured inbox
//! messages, notifying through the configured handler.

use clap::{Parser, Subcommand};
use planwatch_core::logging_facility::{init, Profile};
use std::path::PathBuf;

mod commands;
mod config;

use commands::CommandContext;
use config::PlanWatchConfig;

#[derive(Debug, Parser)]
#[command(name = "planwatch")]
#[command(about = "planwatch - lesson plan and inbox change notifier", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Human-readable debug logging instead of JSON lines
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Lesson plan snapshot operations
    Schedule(commands::schedule::ScheduleArgs),
    /// Inbox message operations
    Messages(commands::messages::MessagesArgs),
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = PlanWatchConfig::load_or_default(cli.config.as_deref())?;
    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Schedule(args) => commands::schedule::execute(&ctx, args),
        Commands::Messages(args) => commands::messages::execute(&ctx, args),
    }
}

fn main() {
    let cli = Cli::parse();

    init(if cli.debug {
        Profile::Development
    } else {
        Profile::Production
    });

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
