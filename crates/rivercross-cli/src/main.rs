//! Rivercross CLI
//!
//! Command-line front end for the wolf, goat and cabbage crossing

use clap::{Parser, Subcommand, ValueEnum};
use rivercross_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "rivercross")]
#[command(about = "Ferry a wolf, a goat and a cabbage across the river", long_about = None)]
struct Cli {
    /// Log output format (written to stderr; RUST_LOG overrides the level)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

impl From<LogFormat> for Profile {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Pretty => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Solve the puzzle interactively
    Play(commands::play::PlayArgs),
    /// Drive the puzzle from a fixed list of selections
    Replay(commands::replay::ReplayArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_format.into());

    let result = match cli.command {
        Commands::Play(args) => commands::play::execute(args),
        Commands::Replay(args) => commands::replay::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
