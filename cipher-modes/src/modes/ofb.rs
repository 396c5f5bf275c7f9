//! OFB (Output Feedback) mode implementation

use crate::{utils, BlockCipher, Result};

use super::CipherModes;

impl CipherModes {
    /// OFB mode encryption
    ///
    /// In OFB mode, the block cipher is used to generate a pseudorandom keystream
    /// which is then XORed with the plaintext.
    ///
    /// Algorithm:
    /// 1. O_0 = IV
    /// 2. O_i = E(K, O_{i-1}) for i = 1, 2, ..., n
    /// 3. C_i = P_i ⊕ O_i
    pub fn ofb_encrypt<C: BlockCipher>(cipher: &C, plaintext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        Self::validate_block_size(block_size)?;
        Self::validate_iv_length(iv, block_size)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut feedback = iv.to_vec();

        for chunk in plaintext.chunks(block_size) {
            feedback = cipher.encrypt_block(&feedback)?;
            ciphertext.extend(utils::xor_blocks(chunk, &feedback[..chunk.len()])?);
        }

        Ok(ciphertext)
    }

    /// OFB mode decryption
    ///
    /// Since OFB is a stream cipher mode, decryption is identical to encryption.
    pub fn ofb_decrypt<C: BlockCipher>(cipher: &C, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        Self::ofb_encrypt(cipher, ciphertext, iv)
    }
}
