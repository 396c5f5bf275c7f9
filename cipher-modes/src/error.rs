//! Error types for cipher mode operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherModeError {
    #[error("Invalid block size (must be > 0)")]
    InvalidBlockSize,

    #[error("Invalid key length: {0} bytes")]
    InvalidKeyLength(usize),

    #[error("Invalid IV length (expected {expected} bytes, got {actual})")]
    InvalidIvLength { expected: usize, actual: usize },

    #[error("Data length {len} is not a multiple of the block size {block_size}")]
    UnalignedData { len: usize, block_size: usize },

    #[error("Padding error")]
    PaddingError,

    #[error("Encryption error: {0}")]
    EncryptionError(String),
}

pub type Result<T> = std::result::Result<T, CipherModeError>;
