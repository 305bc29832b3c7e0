//! # Check Subcommand
//!
//! Validates a single PIN against a set of policies.
//!
//! Exits with status 0 when the PIN is accepted and [`EXIT_REJECTED`] when
//! any policy rejects it.

use anyhow::{Context, Result};
use clap::Args;

use pinfun_core::{PinValue, PolicySet, StandardPolicy};

use crate::config::GenerationConfig;

/// Exit status for a PIN that fails at least one policy.
pub const EXIT_REJECTED: u8 = 2;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// The PIN to check, as decimal digits.
    pub pin: String,

    /// Policy to check against. Repeat to combine. Defaults to the
    /// configured policies.
    #[arg(long = "policy", short = 'p', value_name = "NAME")]
    pub policies: Vec<StandardPolicy>,
}

/// Outcome of checking one PIN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub pin: PinValue,
    pub rejected_by: Vec<String>,
}

impl CheckOutcome {
    pub fn is_valid(&self) -> bool {
        self.rejected_by.is_empty()
    }

    /// One-line human summary.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            format!("{}: valid", self.pin)
        } else {
            format!(
                "{}: invalid (rejected by: {})",
                self.pin,
                self.rejected_by.join(", ")
            )
        }
    }
}

/// Parse `text` and run it through `policies`.
pub fn check_pin(text: &str, policies: &PolicySet) -> Result<CheckOutcome> {
    let pin: PinValue = text
        .parse()
        .with_context(|| format!("cannot parse {text:?} as a PIN"))?;
    let rejected_by = policies
        .rejections(pin.digits())
        .into_iter()
        .map(String::from)
        .collect();
    Ok(CheckOutcome { pin, rejected_by })
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs, config: &GenerationConfig) -> Result<u8> {
    let policies: PolicySet = if args.policies.is_empty() {
        config.policy_set()
    } else {
        args.policies.iter().copied().collect()
    };
    tracing::debug!(?policies, "checking PIN");

    let outcome = check_pin(&args.pin, &policies)?;
    println!("{}", outcome.summary());
    Ok(if outcome.is_valid() { 0 } else { EXIT_REJECTED })
}
