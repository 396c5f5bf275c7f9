//! ChaCha20 stream engine

use chacha20::cipher::{KeyIvInit, StreamCipher};
use chacha20::{ChaCha20, ChaCha20Legacy};
use thiserror::Error;

pub const KEY_LEN: usize = 32;
/// IETF nonce (RFC 8439), 32-bit block counter
pub const NONCE_LEN: usize = 12;
/// DJB nonce, 64-bit block counter
pub const LEGACY_NONCE_LEN: usize = 8;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    #[error("invalid key or nonce length")]
    InvalidLength,

    #[error("keystream exhausted")]
    KeystreamExhausted,
}

/// A fresh ChaCha20 keystream positioned at block 0.
///
/// The nonce length picks the variant. Transforms consume the engine, so a
/// keystream is never applied twice.
pub enum ChaCha20Engine {
    Ietf(ChaCha20),
    Legacy(ChaCha20Legacy),
}

impl ChaCha20Engine {
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self, StreamError> {
        let engine = match iv.len() {
            LEGACY_NONCE_LEN => ChaCha20Legacy::new_from_slices(key, iv).map(Self::Legacy),
            _ => ChaCha20::new_from_slices(key, iv).map(Self::Ietf),
        };
        engine.map_err(|_| StreamError::InvalidLength)
    }

    pub fn encrypt(self, plaintext: &[u8]) -> Result<Vec<u8>, StreamError> {
        self.apply(plaintext)
    }

    pub fn decrypt(self, ciphertext: &[u8]) -> Result<Vec<u8>, StreamError> {
        self.apply(ciphertext)
    }

    fn apply(self, data: &[u8]) -> Result<Vec<u8>, StreamError> {
        let mut buf = data.to_vec();
        let applied = match self {
            Self::Ietf(mut cipher) => cipher.try_apply_keystream(&mut buf),
            Self::Legacy(mut cipher) => cipher.try_apply_keystream(&mut buf),
        };
        applied.map_err(|_| StreamError::KeystreamExhausted)?;
        Ok(buf)
    }
}
