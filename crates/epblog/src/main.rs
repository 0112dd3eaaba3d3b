//! epblog CLI - site configuration tooling for the Embassy Preempt blog.
//!
//! Provides commands for:
//! - `check`: Validate the effective site configuration
//! - `dump`: Print the effective site configuration as JSON
//! - `init`: Write the built-in configuration as a starter `epblog.toml`

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, DumpArgs, InitArgs};
use output::Output;

/// epblog - Embassy Preempt blog site tooling.
#[derive(Parser)]
#[command(name = "epblog", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the effective site configuration.
    Check(CheckArgs),
    /// Print the effective site configuration as JSON.
    Dump(DumpArgs),
    /// Write the built-in configuration as a starter epblog.toml.
    Init(InitArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set for the check command
    let verbose = matches!(&cli.command, Commands::Check(args) if args.verbose);

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Dump(args) => args.execute(),
        Commands::Init(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
