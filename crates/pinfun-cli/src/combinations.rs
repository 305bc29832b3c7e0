//! # Combinations Subcommand
//!
//! Prints the size of the PIN space for a given length, `10^length`.

use anyhow::{Context, Result};
use clap::Args;

use pinfun_core::number_of_combinations;

/// Arguments for the combinations subcommand.
#[derive(Args, Debug)]
pub struct CombinationsArgs {
    /// Digits per PIN.
    pub length: usize,
}

/// Execute the combinations subcommand.
pub fn run_combinations(args: &CombinationsArgs) -> Result<u8> {
    let total = number_of_combinations(args.length)
        .with_context(|| format!("cannot count PINs of length {}", args.length))?;
    println!("{total}");
    Ok(0)
}
