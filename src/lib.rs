//! Random values for every environment
//!
//! This crate produces random fractions, identifiers, secrets, UUIDs,
//! ranged numbers and dates. It uses cryptographically strong randomness
//! where the host provides it, and a deterministic seeded generator
//! (Alea) everywhere else or whenever reproducibility is wanted.
//!
//! # Module overview
//!
//! - `os`
//!   Platform access to secure random bytes (`getrandom` on Linux,
//!   `arc4random_buf` on macOS, `BCryptGenRandom` on Windows), behind the
//!   [`os::EntropySource`] trait. This module contains no derivation logic.
//!
//! - `rng`
//!   The generator contract ([`RandomGenerator`]), its three primitive
//!   sources ([`rng::OsRandomGenerator`], [`rng::HostRandomGenerator`],
//!   [`Alea`]), the entropy collector used to seed the fallback, and the
//!   factory ([`create_random`]) that picks a source and assembles a
//!   complete [`Random`].
//!
//! - `error`
//!   The error taxonomy. Construction errors are the only errors; derived
//!   operations never fail.
//!
//! # Reproducibility
//!
//! A generator built with [`create_with_seeds`] yields the same values,
//! call for call, for the same seeds:
//!
//! ```
//! use fortuity::{create_with_seeds, RandomGenerator};
//!
//! let mut a = create_with_seeds([0]).unwrap();
//! let mut b = create_with_seeds([0]).unwrap();
//!
//! assert_eq!(a.uuid(), b.uuid());
//! assert_eq!(a.id(), b.id());
//! ```
//!
//! # Design goals
//!
//! - One primitive per generator, every other operation derived once
//! - Generators are peers composed by a factory, not a class hierarchy
//! - No process-wide singleton; callers create and own their instances
//! - Fallbacks are explicit, ordered and logged through `tracing`
//!
//! Generators are not synchronized. A seeded generator mutates its state
//! on every draw, so sharing one across threads requires external locking.

pub mod error;
pub mod os;
pub mod rng;

pub use error::{EntropyError, RandomError, Result};
pub use rng::{
    Alea, FactoryConfig, Random, RandomGenerator, Seed, SourceKind, create_random,
    create_random_with, create_with_seeds,
};
