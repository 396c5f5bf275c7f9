//! ECB (Electronic Code Book) mode implementation

use crate::{utils, BlockCipher, Result};

use super::CipherModes;

impl CipherModes {
    /// ECB mode encryption over block-aligned input
    pub fn ecb_encrypt<C: BlockCipher>(cipher: &C, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        Self::validate_block_size(block_size)?;
        utils::ensure_aligned(plaintext.len(), block_size)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        for chunk in plaintext.chunks(block_size) {
            ciphertext.extend(cipher.encrypt_block(chunk)?);
        }

        Ok(ciphertext)
    }

    /// ECB mode decryption
    pub fn ecb_decrypt<C: BlockCipher>(cipher: &C, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        Self::validate_block_size(block_size)?;
        utils::ensure_aligned(ciphertext.len(), block_size)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        for chunk in ciphertext.chunks(block_size) {
            plaintext.extend(cipher.decrypt_block(chunk)?);
        }

        Ok(plaintext)
    }
}
