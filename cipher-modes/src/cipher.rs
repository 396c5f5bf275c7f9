//! Generic block cipher trait

use crate::error::Result;

/// A keyed block permutation.
///
/// Implementors own their expanded key; the chaining code in [`crate::modes`]
/// only ever hands them one block of exactly [`BlockCipher::block_size`] bytes.
pub trait BlockCipher {
    /// Encrypts a single block
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts a single block
    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>>;

    /// Returns the block size of the cipher
    fn block_size(&self) -> usize;
}
