use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carousel_core::CarouselConfig;

mod commands;

#[derive(Parser)]
#[command(name = "carousel")]
#[command(author, version, about = "An infinite, draggable, momentum-scrolling tile carousel")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive carousel
    Run {
        /// Slide manifest (JSON: {"slides": [{"title", "url", "imageUrl"}]})
        #[arg(short = 's', long)]
        slides: Option<PathBuf>,
        /// Write logs to this file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
    /// Run the motion engine headless with scripted input
    Simulate(commands::simulate::SimulateArgs),
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Print the configuration file path
    Path,
}

/// Where log output goes
enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Discard,
}

fn init_logging(level: &str, target: LogTarget<'_>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()),
    );

    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogTarget::File(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init()
        }
        // The TUI owns the screen
        LogTarget::Discard => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::sink))
            .init(),
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = CarouselConfig::load()?;

    let command = cli.command.unwrap_or(Commands::Run {
        slides: None,
        log_file: None,
    });

    match command {
        Commands::Run { slides, log_file } => {
            let target = match &log_file {
                Some(path) => LogTarget::File(path),
                None => LogTarget::Discard,
            };
            init_logging(&config.general.log_level, target)?;
            commands::run::run(config, slides).await
        }
        Commands::Simulate(args) => {
            init_logging(&config.general.log_level, LogTarget::Stderr)?;
            commands::simulate::run(&config, &args)
        }
        Commands::Config { action } => {
            init_logging(&config.general.log_level, LogTarget::Stderr)?;
            match action {
                ConfigAction::Show => commands::config::show(&config),
                ConfigAction::Init { force } => commands::config::init(force),
                ConfigAction::Path => commands::config::path(),
            }
        }
    }
}
