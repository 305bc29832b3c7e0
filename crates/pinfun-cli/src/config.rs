//! # Generation Configuration
//!
//! YAML configuration for batch generation. Every field is optional in the
//! file; missing fields fall back to the defaults below, and unknown fields
//! are rejected so typos surface immediately.
//!
//! ```yaml
//! length: 4
//! count: 1000
//! policies: [digits-are-not-incremental, no-duplicate-digits]
//! seed: 42
//! ```
//!
//! Command-line flags override whatever the file provides.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use pinfun_core::{PolicySet, StandardPolicy};

/// Default PIN length.
pub const DEFAULT_LENGTH: usize = 4;

/// Default number of PINs per batch.
pub const DEFAULT_COUNT: usize = 1000;

/// Batch-generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Digits per PIN.
    pub length: usize,
    /// Number of PINs requested.
    pub count: usize,
    /// Policies every PIN must satisfy.
    pub policies: Vec<StandardPolicy>,
    /// Seed for reproducible output. Entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            count: DEFAULT_COUNT,
            policies: vec![
                StandardPolicy::DigitsAreNotIncremental,
                StandardPolicy::NoDuplicateDigits,
            ],
            seed: None,
        }
    }
}

impl GenerationConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("invalid generation config")
    }

    /// Read and parse a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&text)
            .with_context(|| format!("failed to load config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded generation config");
        Ok(config)
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// The configured policies as a composable set.
    pub fn policy_set(&self) -> PolicySet {
        self.policies.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_run() {
        let config = GenerationConfig::default();
        assert_eq!(config.length, 4);
        assert_eq!(config.count, 1000);
        assert_eq!(
            config.policies,
            vec![
                StandardPolicy::DigitsAreNotIncremental,
                StandardPolicy::NoDuplicateDigits
            ]
        );
        assert_eq!(config.seed, None);
        assert_eq!(config.policy_set().len(), 2);
    }

    #[test]
    fn full_yaml() {
        let config = GenerationConfig::from_yaml(
            "length: 6\ncount: 20\npolicies: [no-even-numbers]\nseed: 7\n",
        )
        .unwrap();
        assert_eq!(config.length, 6);
        assert_eq!(config.count, 20);
        assert_eq!(config.policies, vec![StandardPolicy::NoEvenNumbers]);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn partial_yaml_uses_defaults() {
        let config = GenerationConfig::from_yaml("count: 5\n").unwrap();
        assert_eq!(config.count, 5);
        assert_eq!(config.length, DEFAULT_LENGTH);
        assert_eq!(config.policies.len(), 2);
    }

    #[test]
    fn empty_policy_list_is_allowed() {
        let config = GenerationConfig::from_yaml("policies: []\n").unwrap();
        assert!(config.policy_set().is_empty());
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(GenerationConfig::from_yaml("lenght: 4\n").is_err());
    }

    #[test]
    fn unknown_policy_rejected() {
        assert!(GenerationConfig::from_yaml("policies: [no-odd-numbers]\n").is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pinfun.yaml");
        std::fs::write(&path, "length: 3\npolicies: [no-duplicate-digits]\n").unwrap();

        let config = GenerationConfig::resolve(Some(&path)).unwrap();
        assert_eq!(config.length, 3);
        assert_eq!(config.policies, vec![StandardPolicy::NoDuplicateDigits]);
    }

    #[test]
    fn load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let err = GenerationConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing.yaml"));
    }

    #[test]
    fn resolve_without_path_is_default() {
        assert_eq!(GenerationConfig::resolve(None).unwrap(), GenerationConfig::default());
    }
}
