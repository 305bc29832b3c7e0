//! # PIN Generation
//!
//! `PinGenerator` draws PINs from an injected random source and filters them
//! through a [`PolicySet`].
//!
//! ## Sampling
//!
//! Batch generation samples the `10^length` PIN space without replacement.
//! The pool is never materialized: a sparse Fisher–Yates shuffle keeps only
//! the positions displaced so far, so memory grows with the number of draws
//! rather than with the size of the space. Each point is drawn at most once
//! per run, which gives two guarantees:
//!
//! - the run stops after at most `10^length` draws, however restrictive the
//!   policies are;
//! - when fewer PINs satisfy the policies than were requested, all of them
//!   are returned.
//!
//! The cost is `O(10^length)` in the worst case. PINs are short, and lengths
//! up to about 7 digits are comfortable.
//!
//! ## Supported lengths
//!
//! The size of the space is computed as a `u128`, so lengths `1..=38` can be
//! counted. Longer lengths are rejected by every operation that needs the
//! count.

use std::collections::{BTreeSet, HashMap};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::PinError;
use crate::pin::PinValue;
use crate::policy::PolicySet;

/// Longest PIN whose combination count fits in a `u128`.
pub const MAX_PIN_LENGTH: usize = 38;

/// Number of distinct PINs of `length` digits, `10^length`.
///
/// # Errors
///
/// [`PinError::InvalidArgument`] if `length` is 0 or greater than
/// [`MAX_PIN_LENGTH`].
pub fn number_of_combinations(length: usize) -> Result<u128, PinError> {
    if length == 0 {
        return Err(PinError::invalid("PIN length must be greater than 0"));
    }
    if length > MAX_PIN_LENGTH {
        return Err(PinError::invalid(format!(
            "PIN length {length} exceeds the supported maximum of {MAX_PIN_LENGTH}"
        )));
    }
    10u128
        .checked_pow(length as u32)
        .ok_or_else(|| PinError::invalid(format!("10^{length} overflows u128")))
}

/// `true` iff every policy accepts `pin`. An empty set accepts everything.
pub fn validate(pin: &PinValue, policies: &PolicySet) -> bool {
    pin.validate(policies)
}

/// A validated batch-generation request.
#[derive(Debug)]
pub struct GenerationRequest {
    count: usize,
    length: usize,
    policies: PolicySet,
}

impl GenerationRequest {
    /// # Errors
    ///
    /// [`PinError::InvalidArgument`] if `count` is 0, or `length` is 0 or
    /// longer than [`MAX_PIN_LENGTH`].
    pub fn new(count: usize, length: usize, policies: PolicySet) -> Result<Self, PinError> {
        if count == 0 {
            return Err(PinError::invalid("requested PIN count must be greater than 0"));
        }
        number_of_combinations(length)?;
        Ok(Self {
            count,
            length,
            policies,
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn policies(&self) -> &PolicySet {
        &self.policies
    }
}

/// Outcome of [`PinGenerator::fulfil`].
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// Requested PIN length.
    pub length: usize,
    /// Requested number of PINs.
    pub requested: usize,
    /// Size of the PIN space, `10^length`.
    pub combinations: u128,
    /// Candidates drawn before the run stopped.
    pub attempts: u128,
    /// Names of the policies applied.
    pub policies: Vec<String>,
    /// The unique PINs produced, in ascending order.
    pub pins: BTreeSet<PinValue>,
}

impl GenerationReport {
    /// Whether fewer PINs were produced than requested.
    pub fn is_short(&self) -> bool {
        self.pins.len() < self.requested
    }
}

/// Generates PINs from an owned random source.
///
/// Each generator owns its RNG; callers on different threads use their own
/// generator rather than sharing one.
#[derive(Debug, Clone)]
pub struct PinGenerator<R = StdRng> {
    rng: R,
}

impl PinGenerator<StdRng> {
    /// A generator seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// A deterministic generator: the same seed yields the same PINs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PinGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Give back the random source.
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// A single random PIN with no policy applied.
    pub fn generate_one(&mut self, length: usize) -> Result<PinValue, PinError> {
        PinValue::generate_random(&mut self.rng, length)
    }

    /// A single random PIN accepted by `policies`.
    ///
    /// # Errors
    ///
    /// - [`PinError::InvalidArgument`] for an unsupported `length`.
    /// - [`PinError::Exhausted`] if no PIN of this length satisfies the
    ///   policies.
    pub fn generate_one_with(
        &mut self,
        length: usize,
        policies: &PolicySet,
    ) -> Result<PinValue, PinError> {
        let (pins, attempts) = self.sample(1, length, policies)?;
        pins.into_iter()
            .next()
            .ok_or(PinError::Exhausted { length, attempts })
    }

    /// Up to `count` unique PINs of `length` digits accepted by `policies`,
    /// in ascending order.
    ///
    /// The result holds fewer than `count` PINs when the policies leave too
    /// few acceptable values in the space.
    pub fn generate_set(
        &mut self,
        count: usize,
        length: usize,
        policies: &PolicySet,
    ) -> Result<BTreeSet<PinValue>, PinError> {
        if count == 0 {
            return Err(PinError::invalid("requested PIN count must be greater than 0"));
        }
        let (pins, attempts) = self.sample(count, length, policies)?;
        if pins.len() < count {
            tracing::warn!(
                requested = count,
                produced = pins.len(),
                attempts = %attempts,
                "PIN space exhausted before reaching the requested count"
            );
        }
        Ok(pins)
    }

    /// Run a validated request and describe the result.
    pub fn fulfil(&mut self, request: &GenerationRequest) -> Result<GenerationReport, PinError> {
        let combinations = number_of_combinations(request.length)?;
        let (pins, attempts) = self.sample(request.count, request.length, &request.policies)?;
        Ok(GenerationReport {
            length: request.length,
            requested: request.count,
            combinations,
            attempts,
            policies: request.policies.names().into_iter().map(String::from).collect(),
            pins,
        })
    }

    fn sample(
        &mut self,
        count: usize,
        length: usize,
        policies: &PolicySet,
    ) -> Result<(BTreeSet<PinValue>, u128), PinError> {
        let total = number_of_combinations(length)?;

        // Positions `attempts..total` hold the undrawn pool. A position
        // missing from `displaced` still holds its own index.
        let mut displaced: HashMap<u128, u128> = HashMap::new();
        let mut pins = BTreeSet::new();
        let mut attempts: u128 = 0;

        while pins.len() < count && attempts < total {
            let pick = self.rng.gen_range(attempts..total);
            let drawn = displaced.get(&pick).copied().unwrap_or(pick);
            let front = displaced.remove(&attempts).unwrap_or(attempts);
            if pick != attempts {
                displaced.insert(pick, front);
            }
            attempts += 1;

            let candidate = PinValue::from_index(drawn, length);
            if candidate.validate(policies) {
                pins.insert(candidate);
            }
        }

        tracing::debug!(
            length,
            requested = count,
            produced = pins.len(),
            attempts = %attempts,
            combinations = %total,
            "PIN sampling finished"
        );

        Ok((pins, attempts))
    }
}
