//! Operating system abstraction layer
//!
//! This module provides a unified, platform-independent interface to the
//! secure random bytes offered by the operating system, plus the small
//! amount of host information the entropy collector looks at.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same `sys_random`
//! function, allowing higher-level code to remain fully portable. Targets
//! without a known secure source compile the `unsupported` module, which
//! always reports [`EntropyError::Unsupported`].
//!
//! Unlike a raw syscall wrapper, failures are returned rather than
//! treated as fatal: the generators built on top of this layer decide
//! whether to retry, degrade, or fall back to another source.

use crate::error::EntropyError;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
use macos::sys_random;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "linux")]
use linux::sys_random;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "windows")]
use windows::sys_random;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
mod unsupported;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
use unsupported::sys_random;

/// A source of secure random bytes.
///
/// [`OsRandomGenerator`](crate::rng::OsRandomGenerator) is generic over this
/// trait so hosts can supply their own byte source. Any
/// `FnMut(&mut [u8]) -> Result<(), EntropyError>` closure implements it.
pub trait EntropySource {
    /// Fills `buf` completely, or reports why it could not.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError>;
}

impl<F> EntropySource for F
where
    F: FnMut(&mut [u8]) -> Result<(), EntropyError>,
{
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        self(buf)
    }
}

/// The operating system's secure random byte source.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemEntropy;

impl EntropySource for SystemEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        sys_random(buf)
    }
}

/// Returns the terminal geometry as `(rows, columns)`, if stdout is a terminal.
#[cfg(unix)]
pub(crate) fn display_size() -> Option<(u32, u32)> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };

    let ret = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };

    if ret != 0 || ws.ws_row == 0 || ws.ws_col == 0 {
        return None;
    }

    Some((u32::from(ws.ws_row), u32::from(ws.ws_col)))
}

#[cfg(not(unix))]
pub(crate) fn display_size() -> Option<(u32, u32)> {
    None
}
