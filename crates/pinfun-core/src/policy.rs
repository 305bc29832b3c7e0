//! # Acceptance Policies
//!
//! A policy is a pure predicate over a PIN's digit sequence. The generator
//! only sees the [`Policy`] trait, so new policies plug in without touching
//! generation code: any `Fn(&[u8]) -> bool` is already a policy.
//!
//! Policies compose by logical AND inside a [`PolicySet`]. An empty set
//! accepts every PIN.
//!
//! The built-in predicates are also exposed by name through
//! [`StandardPolicy`], which is what configuration files and the CLI use.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PinError;

/// A stateless predicate deciding whether a digit sequence is acceptable.
pub trait Policy: Send + Sync {
    /// Returns `true` if `digits` is acceptable.
    fn allows(&self, digits: &[u8]) -> bool;

    /// Short identifier used in logs and diagnostics.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> Policy for F
where
    F: Fn(&[u8]) -> bool + Send + Sync,
{
    fn allows(&self, digits: &[u8]) -> bool {
        self(digits)
    }
}

/// Accepts a sequence unless every adjacent pair is strictly increasing.
///
/// A single digit is accepted. `1450` is accepted (`5 -> 0` breaks the run)
/// while `1234` and `1359` are rejected. An empty sequence has no
/// non-increasing pair and is rejected.
pub fn digits_are_not_incremental(digits: &[u8]) -> bool {
    if digits.len() == 1 {
        return true;
    }
    digits.windows(2).any(|pair| pair[0] >= pair[1])
}

/// Accepts a sequence whose digits are pairwise distinct.
pub fn no_duplicate_digits(digits: &[u8]) -> bool {
    let mut seen = HashSet::with_capacity(digits.len());
    digits.iter().all(|d| seen.insert(*d))
}

/// Accepts a sequence made only of odd digits.
pub fn no_even_numbers(digits: &[u8]) -> bool {
    digits.iter().all(|d| d % 2 != 0)
}

/// The built-in policies, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StandardPolicy {
    /// See [`digits_are_not_incremental`].
    DigitsAreNotIncremental,
    /// See [`no_duplicate_digits`].
    NoDuplicateDigits,
    /// See [`no_even_numbers`].
    NoEvenNumbers,
}

impl StandardPolicy {
    /// All built-in policies in declaration order.
    pub fn all() -> &'static [StandardPolicy] {
        &[
            Self::DigitsAreNotIncremental,
            Self::NoDuplicateDigits,
            Self::NoEvenNumbers,
        ]
    }

    /// The kebab-case identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DigitsAreNotIncremental => "digits-are-not-incremental",
            Self::NoDuplicateDigits => "no-duplicate-digits",
            Self::NoEvenNumbers => "no-even-numbers",
        }
    }

    /// One-line human description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::DigitsAreNotIncremental => {
                "reject PINs whose digits strictly increase from left to right"
            }
            Self::NoDuplicateDigits => "reject PINs that repeat any digit",
            Self::NoEvenNumbers => "reject PINs containing an even digit",
        }
    }
}

impl Policy for StandardPolicy {
    fn allows(&self, digits: &[u8]) -> bool {
        match self {
            Self::DigitsAreNotIncremental => digits_are_not_incremental(digits),
            Self::NoDuplicateDigits => no_duplicate_digits(digits),
            Self::NoEvenNumbers => no_even_numbers(digits),
        }
    }

    fn name(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StandardPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StandardPolicy {
    type Err = PinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| PinError::invalid(format!("unknown policy: {s:?}")))
    }
}

/// An ordered list of policies combined with logical AND.
#[derive(Default)]
pub struct PolicySet {
    policies: Vec<Box<dyn Policy>>,
}

impl PolicySet {
    /// An empty set, which accepts every PIN.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, policy: impl Policy + 'static) -> Self {
        self.push(policy);
        self
    }

    /// Append a policy.
    pub fn push(&mut self, policy: impl Policy + 'static) {
        self.policies.push(Box::new(policy));
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Names of the policies, in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.policies.iter().map(|p| p.name()).collect()
    }

    /// `true` iff every policy accepts `digits`; vacuously `true` when empty.
    pub fn allows(&self, digits: &[u8]) -> bool {
        self.policies.iter().all(|p| p.allows(digits))
    }

    /// Names of the policies that reject `digits`.
    pub fn rejections(&self, digits: &[u8]) -> Vec<&str> {
        self.policies
            .iter()
            .filter(|p| !p.allows(digits))
            .map(|p| p.name())
            .collect()
    }
}

impl FromIterator<StandardPolicy> for PolicySet {
    fn from_iter<I: IntoIterator<Item = StandardPolicy>>(iter: I) -> Self {
        let mut set = Self::new();
        for policy in iter {
            set.push(policy);
        }
        set
    }
}

impl fmt::Debug for PolicySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
