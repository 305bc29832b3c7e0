//! # pinfun-cli — PinFun Command-Line Interface
//!
//! The presentation layer over `pinfun-core`. Argument parsing and console
//! output live here; generation, counting and validation are delegated to
//! the core crate.
//!
//! ## Subcommands
//!
//! - `pinfun generate` — Generate a batch of unique, policy-filtered PINs.
//! - `pinfun combinations` — Print the size of the PIN space for a length.
//! - `pinfun check` — Check one PIN against policies.
//! - `pinfun policies` — List the built-in policies.
//!
//! ## Configuration
//!
//! `--config <file.yaml>` supplies generation defaults (see [`config`]);
//! subcommand flags override them.

pub mod check;
pub mod combinations;
pub mod config;
pub mod generate;
pub mod policies;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_modules_are_accessible() {
        let _ = std::any::type_name::<check::CheckArgs>();
        let _ = std::any::type_name::<combinations::CombinationsArgs>();
        let _ = std::any::type_name::<config::GenerationConfig>();
        let _ = std::any::type_name::<generate::GenerateArgs>();
    }
}
