//! PCBC (Propagating Cipher Block Chaining) mode implementation

use crate::{utils, BlockCipher, Result};

use super::CipherModes;

impl CipherModes {
    /// PCBC mode encryption over block-aligned input
    ///
    /// C_i = E(K, P_i ⊕ P_{i-1} ⊕ C_{i-1}), with P_0 ⊕ C_0 = IV
    pub fn pcbc_encrypt<C: BlockCipher>(cipher: &C, plaintext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        Self::validate_block_size(block_size)?;
        Self::validate_iv_length(iv, block_size)?;
        utils::ensure_aligned(plaintext.len(), block_size)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut feedback = iv.to_vec();

        for chunk in plaintext.chunks(block_size) {
            let encrypted_block = cipher.encrypt_block(&utils::xor_blocks(chunk, &feedback)?)?;
            feedback = utils::xor_blocks(chunk, &encrypted_block)?;
            ciphertext.extend(encrypted_block);
        }

        Ok(ciphertext)
    }

    /// PCBC mode decryption
    pub fn pcbc_decrypt<C: BlockCipher>(cipher: &C, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        Self::validate_block_size(block_size)?;
        Self::validate_iv_length(iv, block_size)?;
        utils::ensure_aligned(ciphertext.len(), block_size)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut feedback = iv.to_vec();

        for chunk in ciphertext.chunks(block_size) {
            let decrypted_block = utils::xor_blocks(&cipher.decrypt_block(chunk)?, &feedback)?;
            feedback = utils::xor_blocks(&decrypted_block, chunk)?;
            plaintext.extend(decrypted_block);
        }

        Ok(plaintext)
    }
}
