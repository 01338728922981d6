//! Dailybot CLI — entry point.
//!
//! # Commands
//!
//! - `dailybot run` — fetch today's problem and post it to Discord
//! - `dailybot format [FILE]` — convert problem HTML to Discord markdown
//! - `dailybot status` — show configuration status

mod format_cmd;
mod service;
mod status;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use dailybot_core::config::load_config;

use crate::service::DailyBotService;

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// 📌 Dailybot — posts the LeetCode daily challenge to Discord
#[derive(Parser)]
#[command(name = "dailybot", version, about, long_about = None)]
struct Cli {
    /// Config file (default: ~/.dailybot/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch today's problem and publish it
    Run {
        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Convert problem HTML (FILE or stdin) to Discord markdown
    Format {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Output budget in characters (default: format.maxLength)
        #[arg(short, long)]
        max_length: Option<usize>,
    },

    /// Show configuration status
    Status,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Run { logs } => {
            init_logging(logs);
            let config = load_config(config_path);
            let service = DailyBotService::from_config(&config)?;
            service.process_daily_challenge().await?;
            Ok(())
        }
        Commands::Format { file, max_length } => {
            init_logging(false);
            let config = load_config(config_path);
            let max_length = max_length.unwrap_or(config.format.max_length);
            format_cmd::run(file.as_deref(), max_length)
        }
        Commands::Status => status::run(config_path),
    }
}

/// Initialize tracing/logging. `RUST_LOG` wins when set.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("dailybot=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
