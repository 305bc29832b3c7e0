//! # pinfun-core — PIN Generation Core
//!
//! Generates unique numeric PINs of a configurable length, filtered by
//! composable acceptance policies, and returns them in canonical sorted
//! order.
//!
//! ## Modules
//!
//! - **PIN values** (`pin.rs`): `PinValue`, an immutable fixed-length digit
//!   sequence with string-consistent equality, ordering and hashing.
//!
//! - **Policies** (`policy.rs`): the `Policy` predicate trait, the built-in
//!   predicates, `StandardPolicy` for naming them, and `PolicySet` for
//!   AND-composition.
//!
//! - **Generation** (`generator.rs`): `PinGenerator`, combination counting,
//!   and bounded sampling without replacement over the PIN space.
//!
//! ## Crate Policy
//!
//! - No global random state. Every generator owns an injected `Rng`.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod generator;
pub mod pin;
pub mod policy;

// Re-export primary types for ergonomic imports.
pub use error::PinError;
pub use generator::{
    number_of_combinations, validate, GenerationReport, GenerationRequest, PinGenerator,
    MAX_PIN_LENGTH,
};
pub use pin::PinValue;
pub use policy::{
    digits_are_not_incremental, no_duplicate_digits, no_even_numbers, Policy, PolicySet,
    StandardPolicy,
};
