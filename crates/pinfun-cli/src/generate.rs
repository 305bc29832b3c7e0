//! # Generate Subcommand
//!
//! Generates a batch of unique, policy-filtered PINs and prints a summary
//! followed by the PINs in ascending order.
//!
//! ```bash
//! pinfun generate                                   # 1000 four-digit PINs
//! pinfun generate --length 6 --count 50 --policy no-even-numbers
//! pinfun generate --no-policies --seed 7 --format json
//! pinfun --config pinfun.yaml generate --pause
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use pinfun_core::{GenerationReport, GenerationRequest, PinGenerator, StandardPolicy};

use crate::config::GenerationConfig;

/// Output format for the generated batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Summary lines followed by one PIN per line.
    #[default]
    Text,
    /// The full report as a single JSON object.
    Json,
}

/// Arguments for the generate subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Digits per PIN.
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Number of PINs to generate.
    #[arg(long, short)]
    pub count: Option<usize>,

    /// Policy every PIN must satisfy. Repeat to combine policies.
    #[arg(long = "policy", short = 'p', value_name = "NAME")]
    pub policies: Vec<StandardPolicy>,

    /// Apply no policies at all.
    #[arg(long, conflicts_with = "policies")]
    pub no_policies: bool,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Wait for Enter before listing the PINs (text output only).
    #[arg(long)]
    pub pause: bool,
}

impl GenerateArgs {
    /// Overlay the command-line flags on a loaded configuration.
    pub fn apply(&self, mut config: GenerationConfig) -> GenerationConfig {
        if let Some(length) = self.length {
            config.length = length;
        }
        if let Some(count) = self.count {
            config.count = count;
        }
        if self.no_policies {
            config.policies.clear();
        } else if !self.policies.is_empty() {
            config.policies = self.policies.clone();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}

/// Execute the generate subcommand.
pub fn run_generate(args: &GenerateArgs, config: GenerationConfig) -> Result<u8> {
    let config = args.apply(config);
    let request = GenerationRequest::new(config.count, config.length, config.policy_set())
        .context("invalid generation request")?;

    tracing::info!(
        length = config.length,
        count = config.count,
        policies = ?config.policies,
        seed = ?config.seed,
        "generating PINs"
    );

    let mut generator = match config.seed {
        Some(seed) => PinGenerator::seeded(seed),
        None => PinGenerator::from_entropy(),
    };
    let report = generator.fulfil(&request).context("PIN generation failed")?;

    if report.is_short() {
        tracing::warn!(
            requested = report.requested,
            produced = report.pins.len(),
            "policies allow fewer PINs than requested"
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report).context("failed to write report")?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            write_summary(&mut out, &report)?;
            if args.pause {
                writeln!(out, "Press Enter to display the PINs")?;
                out.flush()?;
                let mut line = String::new();
                io::stdin()
                    .lock()
                    .read_line(&mut line)
                    .context("failed to read from stdin")?;
            }
            write_pins(&mut out, &report)?;
        }
    }
    Ok(0)
}

/// Print the summary block of a text report.
pub fn write_summary(out: &mut impl Write, report: &GenerationReport) -> io::Result<()> {
    writeln!(out, "Requested PIN length: {}", report.length)?;
    writeln!(out, "Number of requested PINs: {}", report.requested)?;
    writeln!(out, "Number of possible PIN combinations: {}", report.combinations)?;
    writeln!(
        out,
        "Based on current policies, generated {} unique PINs.",
        report.pins.len()
    )
}

/// Print one PIN per line.
pub fn write_pins(out: &mut impl Write, report: &GenerationReport) -> io::Result<()> {
    for pin in &report.pins {
        writeln!(out, "{pin}")?;
    }
    Ok(())
}
