//! Random value generation
//!
//! Everything here is built around one primitive, a fraction in `[0, 1)`,
//! and a shared set of derivations on top of it (identifiers, secrets,
//! UUIDs, ranged numbers, dates). The primitive comes from one of three
//! peers:
//!
//! - [`OsRandomGenerator`]: secure bytes from the operating system, with a
//!   retry-then-degrade policy.
//! - [`HostRandomGenerator`]: secure 32-bit values from the host, no
//!   fallback.
//! - [`Alea`]: a seeded, reproducible, non-cryptographic generator.
//!
//! [`create_random`] picks the best available source and wraps it in a
//! [`Random`].

mod alea;
pub mod alphabet;
mod config;
mod entropy;
mod generator;
mod host_generator;
mod os_generator;
mod random;
mod seed;

pub use alea::Alea;
pub use config::FactoryConfig;
pub use entropy::EntropyCollector;
pub use generator::{
    DEFAULT_DECIMAL_MAX, DEFAULT_DECIMAL_PRECISION, DEFAULT_ID_CHARS, DEFAULT_INTEGER_MAX,
    DEFAULT_SECRET_CHARS, RandomGenerator, create_with_seeds, derive_uuid,
};
pub use host_generator::HostRandomGenerator;
pub use os_generator::OsRandomGenerator;
pub use random::{
    BoxedGenerator, Constructor, Random, SourceKind, create_random, create_random_from,
    create_random_with,
};
pub use seed::Seed;
