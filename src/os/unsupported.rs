use crate::error::EntropyError;

pub(crate) fn sys_random(_buf: &mut [u8]) -> Result<(), EntropyError> {
    Err(EntropyError::Unsupported)
}
