//! Error type for the cipher facade

use thiserror::Error;

/// Why a transform produced nothing.
///
/// Deliberately carries no detail: a wrong key length, a wrong IV length,
/// misaligned ciphertext and bad padding all look the same to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherError {
    #[error("encryption failed")]
    EncryptError,

    #[error("decryption failed")]
    DecryptError,
}

pub type Result<T> = std::result::Result<T, CipherError>;
