mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::CliConfig;
use namedraw_core::NamedrawError;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "namedraw")]
#[command(about = "Draw names one at a time until everyone has been picked")]
#[command(version)]
struct Cli {
    /// Config file (defaults to <config dir>/namedraw/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive drawing session
    Start {
        /// Read the first list of names from this file instead of the editor
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Seconds each winner stays on screen
        #[arg(short, long)]
        reveal_secs: Option<u64>,
        /// Continue after each winner from a menu instead of a timer
        #[arg(short, long)]
        manual: bool,
    },
    /// Draw every name at once and print the order
    Order {
        /// File with one name per line (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Print the finished flow as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effective configuration
    Config {
        /// Write a default config file
        #[arg(long)]
        init: bool,
        /// Skip the overwrite prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(config::default_config_path);
    // `config --init` must work even when the current file is broken
    let recover = matches!(cli.command, Commands::Config { init: true, .. });
    let (mut config, skipped) = match CliConfig::load_or_recover(&config_path, recover) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: could not load {}: {}", config_path.display(), e);
            eprintln!("Use 'namedraw config --init --force' to write a fresh one");
            std::process::exit(1);
        }
    };

    if let Commands::Start {
        reveal_secs,
        manual,
        ..
    } = &cli.command
    {
        config.apply_overrides(*reveal_secs, *manual, cli.verbose);
    } else {
        config.apply_overrides(None, false, cli.verbose);
    }

    // Initialize logging
    let log_level = if config.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "namedraw={},namedraw_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(e) = skipped {
        tracing::warn!(
            "Ignoring unreadable config {}: {}",
            config_path.display(),
            e
        );
    }
    tracing::debug!("Using config {}", config_path.display());

    // Execute command
    let result = match cli.command {
        Commands::Start { file, .. } => {
            commands::run_session(commands::SessionOptions {
                file,
                flow: config.flow.clone(),
                manual_reveal: config.manual_reveal,
            })
            .await
        }
        Commands::Order { file, json } => commands::show_draw_order(file.as_deref(), json).await,
        Commands::Config { init, force } => {
            commands::handle_config_command(&config_path, &config, init, force)
        }
    };

    if let Err(e) = result {
        match e {
            NamedrawError::Parse(e) => {
                eprintln!("Error: {}", e);
            }
            NamedrawError::Config(msg) => {
                eprintln!("Error: Invalid configuration: {}", msg);
                eprintln!("Check {} or the command line flags", config_path.display());
            }
            NamedrawError::Dialog(msg) => {
                eprintln!("Error: Prompt failed: {}", msg);
                eprintln!("Interactive sessions need a terminal; try 'namedraw order'");
            }
            _ => {
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
