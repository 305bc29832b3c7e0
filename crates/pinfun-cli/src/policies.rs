//! # Policies Subcommand
//!
//! Lists the built-in policies by name.

use std::io::{self, Write};

use anyhow::Result;

use pinfun_core::StandardPolicy;

/// Write one `name  description` line per built-in policy.
pub fn write_policy_list(out: &mut impl Write) -> io::Result<()> {
    let width = StandardPolicy::all()
        .iter()
        .map(|p| p.as_str().len())
        .max()
        .unwrap_or(0);
    for policy in StandardPolicy::all() {
        writeln!(out, "  {:<width$}  {}", policy.as_str(), policy.description())?;
    }
    Ok(())
}

/// Execute the policies subcommand.
pub fn run_policies() -> Result<u8> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Available policies:")?;
    write_policy_list(&mut out)?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_policy() {
        let mut buf = Vec::new();
        write_policy_list(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), StandardPolicy::all().len());
        for policy in StandardPolicy::all() {
            assert!(text.contains(policy.as_str()));
            assert!(text.contains(policy.description()));
        }
    }
}
