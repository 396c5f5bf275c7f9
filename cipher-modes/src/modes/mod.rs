//! Cipher modes implementation

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ofb;
pub mod pcbc;

use std::fmt;
use std::str::FromStr;

use crate::error::{CipherModeError, Result};

/// Main struct for cipher modes
pub struct CipherModes;

impl CipherModes {
    /// Validate block size
    pub fn validate_block_size(block_size: usize) -> Result<()> {
        if block_size == 0 {
            Err(CipherModeError::InvalidBlockSize)
        } else {
            Ok(())
        }
    }

    /// Validate IV length for modes that require it
    pub fn validate_iv_length(iv: &[u8], block_size: usize) -> Result<()> {
        if iv.len() != block_size {
            Err(CipherModeError::InvalidIvLength {
                expected: block_size,
                actual: iv.len(),
            })
        } else {
            Ok(())
        }
    }
}

/// Block chaining mode selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BlockMode {
    /// Electronic Code Book. Ignores the IV.
    Ecb,
    /// Cipher Block Chaining
    #[default]
    Cbc,
    /// Propagating Cipher Block Chaining
    Pcbc,
    /// Cipher Feedback (full-block segments)
    Cfb,
    /// Output Feedback
    Ofb,
    /// Counter, the IV being the initial counter block
    Ctr,
}

impl BlockMode {
    pub const ALL: [BlockMode; 6] = [
        BlockMode::Ecb,
        BlockMode::Cbc,
        BlockMode::Pcbc,
        BlockMode::Cfb,
        BlockMode::Ofb,
        BlockMode::Ctr,
    ];

    /// Whether the mode consumes an IV of exactly one block
    pub fn requires_iv(self) -> bool {
        !matches!(self, BlockMode::Ecb)
    }

    /// Whether input must be padded to a block multiple
    pub fn is_padded(self) -> bool {
        matches!(self, BlockMode::Ecb | BlockMode::Cbc | BlockMode::Pcbc)
    }

    pub fn name(self) -> &'static str {
        match self {
            BlockMode::Ecb => "ECB",
            BlockMode::Cbc => "CBC",
            BlockMode::Pcbc => "PCBC",
            BlockMode::Cfb => "CFB",
            BlockMode::Ofb => "OFB",
            BlockMode::Ctr => "CTR",
        }
    }
}

impl fmt::Display for BlockMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockMode {
    type Err = CipherModeError;

    fn from_str(s: &str) -> Result<Self> {
        BlockMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CipherModeError::EncryptionError(format!("Unknown block mode: {s}")))
    }
}
