//! Test-only block cipher

use crate::error::{CipherModeError, Result};
use crate::{utils, BlockCipher};

/// Repeating-key XOR "cipher" for exercising the chaining code without a real
/// block cipher. Never use it for anything else.
#[derive(Debug, Clone)]
pub struct DummyCipher {
    block_size: usize,
    key: Vec<u8>,
}

impl DummyCipher {
    pub fn new(block_size: usize, key: &[u8]) -> Self {
        Self {
            block_size,
            key: key.to_vec(),
        }
    }
}

impl BlockCipher for DummyCipher {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        if self.key.is_empty() {
            return Err(CipherModeError::EncryptionError("Key cannot be empty".to_string()));
        }

        let key_cycle: Vec<u8> = self.key.iter().cycle().take(block.len()).cloned().collect();
        utils::xor_blocks(block, &key_cycle)
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        // For XOR, decryption is identical to encryption
        self.encrypt_block(block)
    }

    fn block_size(&self) -> usize {
        self.block_size
    }
}

#[test]
fn test_dummy_cipher_basic() {
    let cipher = DummyCipher::new(8, b"testkey1");
    let encrypted = cipher.encrypt_block(b"hello123").unwrap();
    assert_eq!(cipher.decrypt_block(&encrypted).unwrap(), b"hello123");
}

#[test]
fn test_dummy_cipher_empty_key() {
    let cipher = DummyCipher::new(8, b"");
    assert!(matches!(
        cipher.encrypt_block(b"hello123"),
        Err(CipherModeError::EncryptionError(_))
    ));
}
