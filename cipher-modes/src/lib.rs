//! # Cipher Modes Library
//!
//! Block cipher modes of operation and padding schemes, written against a
//! generic [`BlockCipher`] so any keyed block permutation can be plugged in.
//!
//! ## Supported Modes
//!
//! - **ECB** (Electronic Code Book) - Simple but insecure mode
//! - **CBC** (Cipher Block Chaining) - Widely used, requires IV, the default
//! - **PCBC** (Propagating CBC) - Requires IV
//! - **CFB** (Cipher Feedback) - Stream cipher mode
//! - **OFB** (Output Feedback) - Stream cipher mode
//! - **CTR** (Counter Mode) - Stream cipher mode, parallelizable
//!
//! ECB, CBC and PCBC run over padded input; see [`padding`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cipher_modes::{BlockMode, BlockModeCipher};
//!
//! let engine = BlockModeCipher::new(my_block_cipher, BlockMode::Cbc, &iv)?;
//! let ciphertext = engine.encrypt(b"Hello, World!")?;
//! let plaintext = engine.decrypt(&ciphertext)?;
//! ```

pub mod cipher;
pub mod engine;
pub mod error;
pub mod modes;
pub mod padding;
pub mod utils;

#[cfg(test)]
mod testing;

pub use cipher::BlockCipher;
pub use engine::BlockModeCipher;
pub use error::{CipherModeError, Result};
pub use modes::{BlockMode, CipherModes};
pub use padding::{NoPadding, Padding, Pkcs7, ZeroPadding};
