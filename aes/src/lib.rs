//! AES (FIPS-197) block cipher
//!
//! AES-128, AES-192 and AES-256, selected by key length. [`Aes`] implements
//! [`cipher_modes::BlockCipher`], so it plugs straight into any chaining mode;
//! [`new_engine`] builds the complete block engine from a key, an IV and a
//! [`BlockMode`].

mod key_schedule;
mod state;
mod tables;

use std::fmt;

use cipher_modes::{BlockCipher, BlockMode, BlockModeCipher, CipherModeError, Result};
use log::debug;

use crate::state::State;

/// AES always works on 128-bit blocks
pub const BLOCK_SIZE: usize = 16;

/// Block engine: AES bound to a chaining mode and an IV
pub type AesEngine = BlockModeCipher<Aes>;

/// Builds an AES block engine with PKCS#7 padding.
///
/// This is the single validation point for AES parameters: the key must be
/// 16, 24 or 32 bytes and, for every mode except ECB, the IV exactly 16.
pub fn new_engine(key: &[u8], iv: &[u8], mode: BlockMode) -> Result<AesEngine> {
    let aes = Aes::new(key)?;
    debug!("AES-{} engine, {} mode", key.len() * 8, mode);
    BlockModeCipher::new(aes, mode, iv)
}

/// An expanded AES key
#[derive(Clone)]
pub struct Aes {
    round_keys: Vec<[u8; 16]>,
}

impl Aes {
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self {
            round_keys: key_schedule::expand_key(key)?,
        })
    }

    /// Number of rounds: 10, 12 or 14
    pub fn rounds(&self) -> usize {
        self.round_keys.len() - 1
    }

    /// Initial AddRoundKey, `rounds - 1` full rounds, then a final round
    /// without MixColumns
    pub fn encrypt_block16(&self, block: &[u8; 16]) -> [u8; 16] {
        let rounds = self.rounds();
        let mut state = State::new(block);

        state.add_round_key(&self.round_keys[0]);
        for round_key in &self.round_keys[1..rounds] {
            state.sub_bytes();
            state.shift_rows();
            state.mix_columns();
            state.add_round_key(round_key);
        }
        state.sub_bytes();
        state.shift_rows();
        state.add_round_key(&self.round_keys[rounds]);

        state.to_bytes()
    }

    /// The inverse cipher, round keys applied in reverse order
    pub fn decrypt_block16(&self, block: &[u8; 16]) -> [u8; 16] {
        let rounds = self.rounds();
        let mut state = State::new(block);

        state.add_round_key(&self.round_keys[rounds]);
        for round_key in self.round_keys[1..rounds].iter().rev() {
            state.inv_shift_rows();
            state.inv_sub_bytes();
            state.add_round_key(round_key);
            state.inv_mix_columns();
        }
        state.inv_shift_rows();
        state.inv_sub_bytes();
        state.add_round_key(&self.round_keys[0]);

        state.to_bytes()
    }
}

fn as_block(block: &[u8]) -> Result<&[u8; 16]> {
    block.try_into().map_err(|_| {
        CipherModeError::EncryptionError(format!(
            "AES block must be {BLOCK_SIZE} bytes, got {}",
            block.len()
        ))
    })
}

impl BlockCipher for Aes {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        Ok(self.encrypt_block16(as_block(block)?).to_vec())
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        Ok(self.decrypt_block16(as_block(block)?).to_vec())
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }
}

impl fmt::Debug for Aes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aes")
            .field("rounds", &self.rounds())
            .finish_non_exhaustive()
    }
}
