//! CBC (Cipher Block Chaining) mode implementation

use crate::{utils, BlockCipher, Result};

use super::CipherModes;

impl CipherModes {
    /// CBC mode encryption over block-aligned input
    pub fn cbc_encrypt<C: BlockCipher>(cipher: &C, plaintext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        Self::validate_block_size(block_size)?;
        Self::validate_iv_length(iv, block_size)?;
        utils::ensure_aligned(plaintext.len(), block_size)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut previous_block = iv.to_vec();

        for chunk in plaintext.chunks(block_size) {
            let xored = utils::xor_blocks(chunk, &previous_block)?;
            let encrypted_block = cipher.encrypt_block(&xored)?;
            ciphertext.extend(&encrypted_block);
            previous_block = encrypted_block;
        }

        Ok(ciphertext)
    }

    /// CBC mode decryption
    pub fn cbc_decrypt<C: BlockCipher>(cipher: &C, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        Self::validate_block_size(block_size)?;
        Self::validate_iv_length(iv, block_size)?;
        utils::ensure_aligned(ciphertext.len(), block_size)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut previous_block = iv;

        for chunk in ciphertext.chunks(block_size) {
            let decrypted_block = cipher.decrypt_block(chunk)?;
            plaintext.extend(utils::xor_blocks(&decrypted_block, previous_block)?);
            previous_block = chunk;
        }

        Ok(plaintext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherModeError;
    use crate::testing::DummyCipher;

    #[test]
    fn test_cbc_encrypt_decrypt() {
        let cipher = DummyCipher::new(8, b"testkey1");
        let plaintext = b"samesamesamesame";
        let iv = b"initialv";

        let ciphertext = CipherModes::cbc_encrypt(&cipher, plaintext, iv).unwrap();
        // chaining hides repeated blocks
        assert_ne!(ciphertext[..8], ciphertext[8..]);
        assert_eq!(CipherModes::cbc_decrypt(&cipher, &ciphertext, iv).unwrap(), plaintext);
    }

    #[test]
    fn test_cbc_invalid_iv_length() {
        let cipher = DummyCipher::new(8, b"testkey1");
        let result = CipherModes::cbc_encrypt(&cipher, b"12345678", b"short");
        assert!(matches!(result, Err(CipherModeError::InvalidIvLength { .. })));
    }
}
