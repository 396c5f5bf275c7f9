//! # Symmetric
//!
//! Encrypt or decrypt a byte buffer without caring, at the call site, whether
//! a stream cipher or a block cipher does the work.
//!
//! ```rust
//! use symmetric::{random_iv, BlockMode, Cipher};
//!
//! let key = [0x2a; 32];
//! let cipher = Cipher::aes_with_mode(&key, &random_iv(16), BlockMode::Ctr);
//!
//! let ciphertext = cipher.encrypt(b"attack at dawn")?;
//! assert_eq!(cipher.decrypt(&ciphertext)?, b"attack at dawn");
//! # Ok::<(), symmetric::CipherError>(())
//! ```
//!
//! Failures collapse into [`CipherError::EncryptError`] or
//! [`CipherError::DecryptError`]; the engine's own diagnostic only reaches the
//! `log` output at debug level.

pub mod cipher;
pub mod error;
pub mod iv;
pub mod stream;

pub use cipher::Cipher;
pub use cipher_modes::{BlockMode, NoPadding, Padding, Pkcs7, ZeroPadding};
pub use error::{CipherError, Result};
pub use iv::random_iv;
