//! The cipher selector

use std::fmt;

use cipher_modes::BlockMode;
use log::debug;

use crate::error::{CipherError, Result};
use crate::stream::ChaCha20Engine;

/// Which symmetric cipher to run, with the parameters it needs.
///
/// Each variant owns copies of its key and IV. A value is never mutated and
/// every call to [`Cipher::encrypt`] or [`Cipher::decrypt`] builds a fresh
/// engine from it, so one `Cipher` can be reused and shared between threads.
///
/// Parameters are not checked here. Engine construction validates them on
/// each call, and any rejection surfaces as [`CipherError`].
#[derive(Clone, PartialEq, Eq)]
pub enum Cipher {
    /// ChaCha20 stream cipher: 32-byte key, 12-byte (or 8-byte DJB) IV
    ChaCha20 { key: Vec<u8>, iv: Vec<u8> },
    /// AES block cipher: 16/24/32-byte key, 16-byte IV, PKCS#7 padding where
    /// the mode needs it
    Aes {
        key: Vec<u8>,
        iv: Vec<u8>,
        block_mode: BlockMode,
    },
}

impl Cipher {
    pub fn chacha20(key: &[u8], iv: &[u8]) -> Self {
        Cipher::ChaCha20 {
            key: key.to_vec(),
            iv: iv.to_vec(),
        }
    }

    /// AES in CBC mode
    pub fn aes(key: &[u8], iv: &[u8]) -> Self {
        Self::aes_with_mode(key, iv, BlockMode::default())
    }

    pub fn aes_with_mode(key: &[u8], iv: &[u8], block_mode: BlockMode) -> Self {
        Cipher::Aes {
            key: key.to_vec(),
            iv: iv.to_vec(),
            block_mode,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cipher::ChaCha20 { .. } => "ChaCha20",
            Cipher::Aes { .. } => "AES",
        }
    }

    /// Encrypts the whole buffer, or produces nothing.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let fail = |cause: &dyn fmt::Display| {
            debug!("{} encryption failed: {}", self.name(), cause);
            CipherError::EncryptError
        };

        match self {
            Cipher::ChaCha20 { key, iv } => {
                let engine = ChaCha20Engine::new(key, iv).map_err(|e| fail(&e))?;
                engine.encrypt(plaintext).map_err(|e| fail(&e))
            }
            Cipher::Aes {
                key,
                iv,
                block_mode,
            } => {
                let engine = aes_engine::new_engine(key, iv, *block_mode).map_err(|e| fail(&e))?;
                engine.encrypt(plaintext).map_err(|e| fail(&e))
            }
        }
    }

    /// Decrypts the whole buffer, or produces nothing.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let fail = |cause: &dyn fmt::Display| {
            debug!("{} decryption failed: {}", self.name(), cause);
            CipherError::DecryptError
        };

        match self {
            Cipher::ChaCha20 { key, iv } => {
                let engine = ChaCha20Engine::new(key, iv).map_err(|e| fail(&e))?;
                engine.decrypt(ciphertext).map_err(|e| fail(&e))
            }
            Cipher::Aes {
                key,
                iv,
                block_mode,
            } => {
                let engine = aes_engine::new_engine(key, iv, *block_mode).map_err(|e| fail(&e))?;
                engine.decrypt(ciphertext).map_err(|e| fail(&e))
            }
        }
    }
}

// Keys stay out of logs and panic messages.
impl fmt::Debug for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cipher::ChaCha20 { key, iv } => f
                .debug_struct("ChaCha20")
                .field("key_len", &key.len())
                .field("iv_len", &iv.len())
                .finish(),
            Cipher::Aes {
                key,
                iv,
                block_mode,
            } => f
                .debug_struct("Aes")
                .field("key_len", &key.len())
                .field("iv_len", &iv.len())
                .field("block_mode", block_mode)
                .finish(),
        }
    }
}
