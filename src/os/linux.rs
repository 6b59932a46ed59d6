//! Operating system abstraction layer (Linux)
//!
//! Secure random bytes come straight from the kernel through the
//! `getrandom` system call, which is suitable for cryptographic use once
//! the entropy pool has been initialized.

use libc::{c_void, getrandom};

use crate::error::EntropyError;

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// Partial reads and `EINTR` are handled transparently by looping until the
/// buffer is full. Any other failure is reported to the caller; a kernel
/// without the syscall reports [`EntropyError::Unsupported`].
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), EntropyError> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            let code = std::io::Error::last_os_error().raw_os_error().unwrap_or(0);

            match code {
                libc::EINTR => continue,
                libc::ENOSYS => return Err(EntropyError::Unsupported),
                _ => return Err(EntropyError::Os { code }),
            }
        }

        filled += ret as usize;
    }

    Ok(())
}
