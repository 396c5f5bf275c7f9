//! Utility functions for cipher modes

use crate::error::{CipherModeError, Result};

/// XOR two byte arrays
pub fn xor_blocks(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    if a.len() != b.len() {
        return Err(CipherModeError::EncryptionError(
            "Blocks have different lengths for XOR".to_string(),
        ));
    }

    Ok(a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect())
}

/// Increment a big-endian counter block in place, wrapping on overflow
pub fn increment_be(counter: &mut [u8]) {
    for byte in counter.iter_mut().rev() {
        let (next, carry) = byte.overflowing_add(1);
        *byte = next;
        if !carry {
            break;
        }
    }
}

/// Fails unless `len` is a non-zero multiple of `block_size`
pub fn ensure_aligned(len: usize, block_size: usize) -> Result<()> {
    if len == 0 || len % block_size != 0 {
        Err(CipherModeError::UnalignedData { len, block_size })
    } else {
        Ok(())
    }
}
