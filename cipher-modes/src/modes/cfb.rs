//! CFB (Cipher Feedback) mode implementation

use crate::{utils, BlockCipher, Result};

use super::CipherModes;

impl CipherModes {
    /// CFB mode encryption with full-block segments
    ///
    /// Algorithm:
    /// 1. C_0 = IV
    /// 2. C_i = P_i ⊕ E(K, C_{i-1})
    ///
    /// A trailing partial block uses only as much keystream as it needs.
    pub fn cfb_encrypt<C: BlockCipher>(cipher: &C, plaintext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        Self::validate_block_size(block_size)?;
        Self::validate_iv_length(iv, block_size)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut feedback = iv.to_vec();

        for chunk in plaintext.chunks(block_size) {
            let keystream = cipher.encrypt_block(&feedback)?;
            let xored = utils::xor_blocks(chunk, &keystream[..chunk.len()])?;
            ciphertext.extend(&xored);
            feedback = xored;
        }

        Ok(ciphertext)
    }

    /// CFB mode decryption
    pub fn cfb_decrypt<C: BlockCipher>(cipher: &C, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        Self::validate_block_size(block_size)?;
        Self::validate_iv_length(iv, block_size)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut feedback = iv;

        for chunk in ciphertext.chunks(block_size) {
            let keystream = cipher.encrypt_block(feedback)?;
            plaintext.extend(utils::xor_blocks(chunk, &keystream[..chunk.len()])?);
            feedback = chunk;
        }

        Ok(plaintext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::DummyCipher;

    #[test]
    fn test_cfb_encrypt_decrypt() {
        let cipher = DummyCipher::new(8, b"testkey1");
        let plaintext = b"Hello World! This is a test message.";
        let iv = b"initialv";

        let ciphertext = CipherModes::cfb_encrypt(&cipher, plaintext, iv).unwrap();
        assert_eq!(ciphertext.len(), plaintext.len());

        let decrypted = CipherModes::cfb_decrypt(&cipher, &ciphertext, iv).unwrap();
        assert_eq!(plaintext, &decrypted[..]);
    }

    #[test]
    fn test_cfb_empty_input() {
        let cipher = DummyCipher::new(8, b"testkey1");
        assert!(CipherModes::cfb_encrypt(&cipher, b"", b"initialv").unwrap().is_empty());
    }
}
