//! CTR (Counter) mode implementation

use crate::{utils, BlockCipher, Result};

use super::CipherModes;

impl CipherModes {
    /// CTR mode encryption
    ///
    /// The IV is the initial counter block. It is treated as one big-endian
    /// integer and incremented (wrapping) after every block.
    ///
    /// Algorithm:
    /// 1. T_1 = IV, T_i = T_{i-1} + 1 mod 2^(8 * block_size)
    /// 2. C_i = P_i ⊕ E(K, T_i)
    pub fn ctr_encrypt<C: BlockCipher>(cipher: &C, plaintext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        Self::validate_block_size(block_size)?;
        Self::validate_iv_length(iv, block_size)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut counter = iv.to_vec();

        for chunk in plaintext.chunks(block_size) {
            let keystream = cipher.encrypt_block(&counter)?;
            ciphertext.extend(utils::xor_blocks(chunk, &keystream[..chunk.len()])?);
            utils::increment_be(&mut counter);
        }

        Ok(ciphertext)
    }

    /// CTR mode decryption
    ///
    /// Since CTR is a stream cipher mode, decryption is identical to encryption.
    pub fn ctr_decrypt<C: BlockCipher>(cipher: &C, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        Self::ctr_encrypt(cipher, ciphertext, iv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::DummyCipher;

    #[test]
    fn test_ctr_encrypt_decrypt() {
        let cipher = DummyCipher::new(8, b"testkey1");
        let plaintext = b"Hello World! This is a test message.";
        let iv = [0u8, 0, 0, 0, 0, 0, 0x03, 0xe8];

        let ciphertext = CipherModes::ctr_encrypt(&cipher, plaintext, &iv).unwrap();
        let decrypted = CipherModes::ctr_decrypt(&cipher, &ciphertext, &iv).unwrap();

        assert_eq!(plaintext, &decrypted[..]);
    }

    #[test]
    fn test_ctr_partial_block() {
        let cipher = DummyCipher::new(8, b"testkey1");
        let plaintext = b"Hi";
        let iv = [42u8; 8];

        let ciphertext = CipherModes::ctr_encrypt(&cipher, plaintext, &iv).unwrap();
        let decrypted = CipherModes::ctr_decrypt(&cipher, &ciphertext, &iv).unwrap();

        assert_eq!(plaintext, &decrypted[..]);
        assert_eq!(ciphertext.len(), plaintext.len()); // No padding in CTR
    }

    #[test]
    fn test_ctr_counter_overflow() {
        let cipher = DummyCipher::new(8, b"testkey1");
        let plaintext = b"Test overflow!!!";
        let iv = [0xffu8; 8];

        // Should not panic, the counter wraps to zero
        let ciphertext = CipherModes::ctr_encrypt(&cipher, plaintext, &iv).unwrap();
        let second_keystream = utils::xor_blocks(&ciphertext[8..], &plaintext[8..]).unwrap();
        assert_eq!(second_keystream, cipher.encrypt_block(&[0u8; 8]).unwrap());

        let decrypted = CipherModes::ctr_decrypt(&cipher, &ciphertext, &iv).unwrap();
        assert_eq!(plaintext, &decrypted[..]);
    }
}
