//! # PIN Values
//!
//! Defines `PinValue`, an immutable, fixed-length sequence of decimal digits.
//!
//! ## Invariants
//!
//! - A `PinValue` holds at least one digit.
//! - Every digit is in `0..=9`. Out-of-range digits are rejected at
//!   construction, so the random and parse paths and direct construction
//!   agree on what a valid PIN is.
//! - The length never changes after construction.
//!
//! ## Equality and Ordering
//!
//! PINs compare by their decimal-string form, ordinally. Each digit renders
//! as exactly one ASCII byte, so the derived lexicographic ordering over the
//! digit sequence is the same relation: `"0042" < "042" < "42"`, and PINs of
//! different lengths are never equal even when numerically equal.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::PinError;
use crate::policy::PolicySet;

/// Largest value a single PIN digit may take.
pub const MAX_DIGIT: u8 = 9;

/// An immutable, fixed-length PIN made of decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PinValue {
    digits: Vec<u8>,
}

impl PinValue {
    /// Create a PIN from an explicit digit sequence.
    ///
    /// # Errors
    ///
    /// Returns [`PinError::InvalidArgument`] if `digits` is empty or any
    /// digit is greater than 9.
    pub fn new(digits: Vec<u8>) -> Result<Self, PinError> {
        if digits.is_empty() {
            return Err(PinError::invalid("a PIN must have at least one digit"));
        }
        if let Some((pos, digit)) = digits.iter().enumerate().find(|(_, d)| **d > MAX_DIGIT) {
            return Err(PinError::invalid(format!(
                "digit {digit} at position {pos} is outside 0..=9"
            )));
        }
        Ok(Self { digits })
    }

    /// Generate a PIN of `length` digits, each drawn uniformly from `0..=9`.
    ///
    /// Uses the supplied random source. Not suitable where cryptographic
    /// unpredictability is required unless `rng` itself is a CSPRNG.
    pub fn generate_random<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Result<Self, PinError> {
        if length == 0 {
            return Err(PinError::invalid("PIN length must be greater than 0"));
        }
        let digits = (0..length).map(|_| rng.gen_range(0..=MAX_DIGIT)).collect();
        Ok(Self { digits })
    }

    /// Parse a PIN from its decimal-string form, one digit per character.
    ///
    /// Leading zeros are kept: `"0042"` is a 4-digit PIN.
    ///
    /// # Errors
    ///
    /// - [`PinError::InvalidArgument`] if `s` is empty.
    /// - [`PinError::Format`] if any character is not an ASCII decimal digit.
    pub fn parse(s: &str) -> Result<Self, PinError> {
        if s.is_empty() {
            return Err(PinError::invalid("cannot parse a PIN from an empty string"));
        }
        let digits = s
            .chars()
            .enumerate()
            .map(|(pos, c)| match c {
                '0'..='9' => Ok(c as u8 - b'0'),
                other => Err(PinError::Format(format!(
                    "{other:?} at position {pos} is not a decimal digit"
                ))),
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Ok(Self { digits })
    }

    /// The `index`-th point of the `length`-digit PIN space: `index` written
    /// in decimal and zero-padded to `length` digits.
    ///
    /// Callers guarantee `length >= 1` and `index < 10^length`.
    pub(crate) fn from_index(mut index: u128, length: usize) -> Self {
        let mut digits = vec![0u8; length];
        for slot in digits.iter_mut().rev() {
            *slot = (index % 10) as u8;
            index /= 10;
        }
        Self { digits }
    }

    /// The digit sequence, most significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always `false`; a PIN has at least one digit.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Whether every policy in `policies` accepts this PIN.
    ///
    /// An empty policy set accepts everything.
    pub fn validate(&self, policies: &PolicySet) -> bool {
        policies.allows(&self.digits)
    }
}

impl fmt::Display for PinValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl FromStr for PinValue {
    type Err = PinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Vec<u8>> for PinValue {
    type Error = PinError;

    fn try_from(digits: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(digits)
    }
}

impl TryFrom<String> for PinValue {
    type Error = PinError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<PinValue> for String {
    fn from(pin: PinValue) -> Self {
        pin.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn pin(digits: &[u8]) -> PinValue {
        PinValue::new(digits.to_vec()).unwrap()
    }

    fn hash_of(p: &PinValue) -> u64 {
        let mut h = DefaultHasher::new();
        p.hash(&mut h);
        h.finish()
    }

    #[test]
    fn length_matches_digit_count() {
        assert_eq!(pin(&[1, 1, 1, 1]).len(), 4);
        assert_eq!(pin(&[7]).len(), 1);
    }

    #[test]
    fn new_rejects_empty() {
        let err = PinValue::new(Vec::new()).unwrap_err();
        assert!(matches!(err, PinError::InvalidArgument(_)));
    }

    #[test]
    fn new_rejects_out_of_range_digit() {
        let err = PinValue::new(vec![1, 10, 3]).unwrap_err();
        match err {
            PinError::InvalidArgument(msg) => assert!(msg.contains("position 1")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn generated_pin_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(7);
        let p = PinValue::generate_random(&mut rng, 5).unwrap();
        assert_eq!(p.len(), 5);
        assert!(p.digits().iter().all(|d| *d <= MAX_DIGIT));
    }

    #[test]
    fn generate_rejects_zero_length() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = PinValue::generate_random(&mut rng, 0).unwrap_err();
        assert!(matches!(err, PinError::InvalidArgument(_)));
    }

    #[test]
    fn generation_is_deterministic_for_a_seed() {
        let a = PinValue::generate_random(&mut StdRng::seed_from_u64(99), 8).unwrap();
        let b = PinValue::generate_random(&mut StdRng::seed_from_u64(99), 8).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn display_keeps_leading_zeros() {
        assert_eq!(pin(&[0, 0, 4, 2]).to_string(), "0042");
    }

    #[test]
    fn parse_keeps_leading_zeros_and_length() {
        let p: PinValue = "0042".parse().unwrap();
        assert_eq!(p.len(), 4);
        assert_eq!(p.digits(), &[0, 0, 4, 2]);
    }

    #[test]
    fn parse_rejects_non_digits() {
        assert!(matches!("12a4".parse::<PinValue>(), Err(PinError::Format(_))));
        assert!(matches!(" 123".parse::<PinValue>(), Err(PinError::Format(_))));
        assert!(matches!("-1".parse::<PinValue>(), Err(PinError::Format(_))));
        assert!(matches!("١٢".parse::<PinValue>(), Err(PinError::Format(_))));
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(matches!("".parse::<PinValue>(), Err(PinError::InvalidArgument(_))));
    }

    #[test]
    fn equal_pins_are_equal() {
        let a = pin(&[1, 5, 5, 1]);
        let b = pin(&[1, 5, 5, 1]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn different_lengths_are_never_equal() {
        assert_ne!(pin(&[1, 5, 5, 1]), pin(&[1, 5, 5, 1, 6, 8]));
        assert_ne!(pin(&[0, 4, 2]), pin(&[4, 2]));
    }

    #[test]
    fn ordering_follows_decimal_string() {
        let mut pins = vec![pin(&[4, 2]), pin(&[0, 0, 4, 2]), pin(&[0, 4, 2]), pin(&[1, 0])];
        pins.sort();
        let rendered: Vec<String> = pins.iter().map(ToString::to_string).collect();
        let mut expected = rendered.clone();
        expected.sort();
        assert_eq!(rendered, expected);
        assert_eq!(rendered, vec!["0042", "042", "10", "42"]);
    }

    #[test]
    fn string_ordering_is_not_numeric() {
        assert!(pin(&[9]) > pin(&[1, 0]));
    }

    #[test]
    fn from_index_zero_pads() {
        assert_eq!(PinValue::from_index(7, 3).to_string(), "007");
        assert_eq!(PinValue::from_index(999, 3).to_string(), "999");
        assert_eq!(PinValue::from_index(0, 1).to_string(), "0");
    }

    #[test]
    fn serde_uses_decimal_string() {
        let p = pin(&[0, 1, 2, 3]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"0123\"");
        let back: PinValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn serde_rejects_invalid_text() {
        assert!(serde_json::from_str::<PinValue>("\"12x\"").is_err());
        assert!(serde_json::from_str::<PinValue>("\"\"").is_err());
    }
}
