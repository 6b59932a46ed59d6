//! Server-style secure generator
//!
//! The primitive of this generator is [`hex_string`], backed by raw secure
//! bytes from an [`EntropySource`] (the operating system by default).
//! [`fraction`] is derived from it by reading eight secure hex digits as an
//! unsigned 32-bit integer.
//!
//! ## Failure policy
//!
//! A failed read is retried once. If the retry also fails, the requested
//! digits come from a **non-cryptographic** thread-local generator instead.
//! This keeps callers running through transient entropy exhaustion at the
//! cost of silently weaker output, so every degraded read is counted (see
//! [`OsRandomGenerator::degraded_count`]) and logged at `warn` level.
//!
//! [`hex_string`]: RandomGenerator::hex_string
//! [`fraction`]: RandomGenerator::fraction

use std::fmt;

use rand::Rng;
use tracing::{debug, warn};
use uuid::Builder;

use crate::error::{EntropyError, RandomError, Result};
use crate::os::{EntropySource, SystemEntropy};
use crate::rng::SourceKind;
use crate::rng::alea::TWO_POW_NEG_32;
use crate::rng::alphabet::HEX;
use crate::rng::generator::{RandomGenerator, derive_uuid};

/// Secure generator drawing raw bytes from an [`EntropySource`].
pub struct OsRandomGenerator<E = SystemEntropy> {
    entropy: E,

    /// Number of reads served by the weak fallback.
    degraded: u64,
}

impl<E> fmt::Debug for OsRandomGenerator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OsRandomGenerator")
            .field("degraded", &self.degraded)
            .finish_non_exhaustive()
    }
}

impl OsRandomGenerator<SystemEntropy> {
    /// Creates a generator backed by the operating system.
    ///
    /// Fails with [`RandomError::CapabilityUnavailable`] if the OS source
    /// cannot be read at all.
    pub fn new() -> Result<Self> {
        Self::with_source(SystemEntropy)
    }
}

impl<E: EntropySource> OsRandomGenerator<E> {
    /// Creates a generator backed by a custom byte source.
    ///
    /// The source is probed once; a failing probe means the capability is
    /// absent and construction fails.
    pub fn with_source(mut entropy: E) -> Result<Self> {
        let mut probe = [0u8; 4];

        entropy
            .fill(&mut probe)
            .map_err(|reason| RandomError::CapabilityUnavailable {
                kind: SourceKind::Os,
                reason,
            })?;

        Ok(Self {
            entropy,
            degraded: 0,
        })
    }

    /// How many reads fell back to non-cryptographic output.
    pub fn degraded_count(&self) -> u64 {
        self.degraded
    }

    /// Reads `len` secure bytes, retrying once on failure.
    fn secure_bytes(&mut self, len: usize) -> std::result::Result<Vec<u8>, EntropyError> {
        let mut bytes = vec![0u8; len];

        if let Err(error) = self.entropy.fill(&mut bytes) {
            warn!(%error, "secure random read failed, retrying");
            self.entropy.fill(&mut bytes)?;
        }

        Ok(bytes)
    }
}

impl<E: EntropySource> RandomGenerator for OsRandomGenerator<E> {
    fn fraction(&mut self) -> f64 {
        let digits = self.hex_string(8);
        let numerator = u32::from_str_radix(&digits, 16).unwrap_or_default();

        f64::from(numerator) * TWO_POW_NEG_32
    }

    fn hex_string(&mut self, digits: usize) -> String {
        match self.secure_bytes(digits.div_ceil(2)) {
            Ok(bytes) => {
                let mut out = hex::encode(bytes);
                // An odd digit count leaves half a byte unused.
                out.truncate(digits);
                out
            }
            Err(error) => {
                self.degraded += 1;
                warn!(
                    %error,
                    digits,
                    degraded = self.degraded,
                    "secure random unavailable, using non-cryptographic digits"
                );
                weak_hex(digits)
            }
        }
    }

    fn uuid(&mut self) -> String {
        let mut bytes = [0u8; 16];

        match self.entropy.fill(&mut bytes) {
            Ok(()) => Builder::from_random_bytes(bytes).into_uuid().to_string(),
            Err(error) => {
                debug!(%error, "native uuid failed, deriving from fractions");
                derive_uuid(self)
            }
        }
    }
}

fn weak_hex(digits: usize) -> String {
    let alphabet = HEX.as_bytes();
    let mut rng = rand::thread_rng();

    (0..digits)
        .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
        .collect()
}
