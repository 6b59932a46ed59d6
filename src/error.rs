//! Error types for the fortuity crate.
//!
//! Only two kinds of failure ever reach a caller: asking for a seeded
//! generator without seeds, and constructing a secure generator on a host
//! that cannot back it. Everything that happens after construction is
//! handled inside the generators themselves.

use thiserror::Error;

use crate::rng::SourceKind;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RandomError>;

/// Errors surfaced by generator construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// `create_with_seeds` was called with an empty seed list.
    #[error("no seeds were provided")]
    NoSeeds,

    /// The host does not provide the capability a generator needs.
    ///
    /// The factory recovers from this by trying the next source in its
    /// configured order.
    #[error("{kind} source is unavailable: {reason}")]
    CapabilityUnavailable {
        /// Which generator failed to construct.
        kind: SourceKind,
        /// Why the underlying entropy source refused.
        reason: EntropyError,
    },

    /// The factory configuration lists no sources to try.
    #[error("factory configuration lists no sources")]
    NoSources,

    /// The factory configuration names a source it cannot construct.
    #[error("{kind} source cannot be built by the factory")]
    InvalidSource {
        /// The rejected source.
        kind: SourceKind,
    },
}

/// Failures reported by a secure random byte source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntropyError {
    /// No secure random source exists on this platform.
    #[error("no secure random source on this platform")]
    Unsupported,

    /// The operating system returned an error code.
    #[error("secure random source failed with os error {code}")]
    Os {
        /// Raw OS error code (errno or NTSTATUS).
        code: i32,
    },

    /// A platform-specific failure without an OS error code.
    #[error("secure random source failed with platform code {code}")]
    Platform {
        /// Implementation-defined error code.
        code: u32,
    },
}

impl From<getrandom::Error> for EntropyError {
    fn from(err: getrandom::Error) -> Self {
        if let Some(code) = err.raw_os_error() {
            EntropyError::Os { code }
        } else if err == getrandom::Error::UNSUPPORTED {
            EntropyError::Unsupported
        } else {
            EntropyError::Platform {
                code: err.code().get(),
            }
        }
    }
}
