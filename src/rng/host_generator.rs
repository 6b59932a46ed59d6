//! Client-style secure generator
//!
//! The primitive is [`fraction`](RandomGenerator::fraction) itself: one
//! secure unsigned 32-bit value from the host (via the `getrandom` crate),
//! scaled by 2^-32. There is no fallback at this layer. A host without
//! secure randomness is rejected at construction, and the factory moves on
//! to the next source.

use tracing::debug;
use uuid::Builder;

use crate::error::{EntropyError, RandomError, Result};
use crate::rng::SourceKind;
use crate::rng::alea::TWO_POW_NEG_32;
use crate::rng::generator::{RandomGenerator, derive_uuid};

/// Secure generator drawing 32-bit values from the host.
#[derive(Debug)]
pub struct HostRandomGenerator {
    _private: (),
}

impl HostRandomGenerator {
    /// Creates a generator, failing if the host has no secure source.
    pub fn new() -> Result<Self> {
        let mut probe = [0u8; 4];

        getrandom::getrandom(&mut probe).map_err(|err| RandomError::CapabilityUnavailable {
            kind: SourceKind::Host,
            reason: EntropyError::from(err),
        })?;

        Ok(Self { _private: () })
    }
}

impl RandomGenerator for HostRandomGenerator {
    /// # Panics
    /// Panics if the host's secure source fails after construction. Such a
    /// failure is considered unrecoverable in a cryptographic context.
    fn fraction(&mut self) -> f64 {
        let mut buf = [0u8; 4];

        if let Err(err) = getrandom::getrandom(&mut buf) {
            panic!("secure random values unavailable: {}", EntropyError::from(err));
        }

        f64::from(u32::from_ne_bytes(buf)) * TWO_POW_NEG_32
    }

    fn uuid(&mut self) -> String {
        let mut bytes = [0u8; 16];

        match getrandom::getrandom(&mut bytes) {
            Ok(()) => Builder::from_random_bytes(bytes).into_uuid().to_string(),
            Err(err) => {
                debug!(error = %EntropyError::from(err), "native uuid failed, deriving from fractions");
                derive_uuid(self)
            }
        }
    }
}
