//! # pinfun CLI entry point
//!
//! Parses command-line arguments, installs logging, loads configuration and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pinfun_cli::check::{run_check, CheckArgs};
use pinfun_cli::combinations::{run_combinations, CombinationsArgs};
use pinfun_cli::config::GenerationConfig;
use pinfun_cli::generate::{run_generate, GenerateArgs};
use pinfun_cli::policies::run_policies;

/// PinFun — generate sets of unique, policy-filtered numeric PINs.
#[derive(Parser, Debug)]
#[command(name = "pinfun", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML generation config.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a batch of unique PINs.
    Generate(GenerateArgs),

    /// Print the number of possible PINs of a given length.
    Combinations(CombinationsArgs),

    /// Check a PIN against policies.
    Check(CheckArgs),

    /// List the built-in policies.
    Policies,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("pinfun v{} starting", env!("CARGO_PKG_VERSION"));

    let result = GenerationConfig::resolve(cli.config.as_deref()).and_then(|config| {
        match cli.command {
            Commands::Generate(args) => run_generate(&args, config),
            Commands::Combinations(args) => run_combinations(&args),
            Commands::Check(args) => run_check(&args, &config),
            Commands::Policies => run_policies(),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
