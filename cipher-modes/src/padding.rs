//! Padding schemes
//!
//! A [`Padding`] extends a buffer to a multiple of the block size before a
//! padded mode (ECB, CBC, PCBC) encrypts it, and strips that extension again
//! after decryption.

use crate::error::{CipherModeError, Result};

/// Capability every padding scheme provides.
pub trait Padding: Send + Sync {
    /// Returns `data` followed by the scheme's padding bytes.
    fn add(&self, data: &[u8], block_size: usize) -> Vec<u8>;

    /// Returns `data` with the scheme's padding stripped.
    ///
    /// When `block_size` is `None` the scheme falls back to its own
    /// inference rule, documented on each implementation.
    fn remove(&self, data: &[u8], block_size: Option<usize>) -> Result<Vec<u8>>;
}

/// PKCS#7: `n` bytes of value `n`, always at least one byte.
///
/// Without a block size, the pad length is read from the last byte alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pkcs7;

impl Padding for Pkcs7 {
    fn add(&self, data: &[u8], block_size: usize) -> Vec<u8> {
        // PKCS#7 cannot express a pad length above 255
        let block_size = block_size.clamp(1, u8::MAX as usize);
        let pad = block_size - data.len() % block_size;

        let mut padded = Vec::with_capacity(data.len() + pad);
        padded.extend_from_slice(data);
        padded.resize(data.len() + pad, pad as u8);
        padded
    }

    fn remove(&self, data: &[u8], block_size: Option<usize>) -> Result<Vec<u8>> {
        let pad = *data.last().ok_or(CipherModeError::PaddingError)? as usize;

        if pad == 0 || pad > data.len() {
            return Err(CipherModeError::PaddingError);
        }
        if let Some(block_size) = block_size {
            if block_size == 0 || pad > block_size || data.len() % block_size != 0 {
                return Err(CipherModeError::PaddingError);
            }
        }

        let (body, tail) = data.split_at(data.len() - pad);
        if tail.iter().any(|&b| b as usize != pad) {
            return Err(CipherModeError::PaddingError);
        }

        Ok(body.to_vec())
    }
}

/// Null padding: zero bytes, added only when the data is unaligned.
///
/// Lossy for data that itself ends in zero bytes. Without a block size,
/// `remove` strips every trailing zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroPadding;

impl Padding for ZeroPadding {
    fn add(&self, data: &[u8], block_size: usize) -> Vec<u8> {
        let mut padded = data.to_vec();
        if block_size == 0 {
            return padded;
        }

        let remainder = data.len() % block_size;
        if remainder != 0 {
            padded.resize(data.len() + block_size - remainder, 0);
        }

        padded
    }

    fn remove(&self, data: &[u8], block_size: Option<usize>) -> Result<Vec<u8>> {
        let limit = match block_size {
            Some(0) => return Err(CipherModeError::InvalidBlockSize),
            Some(block_size) => block_size - 1,
            None => data.len(),
        };

        let zeros = data.iter().rev().take(limit).take_while(|&&b| b == 0).count();
        Ok(data[..data.len() - zeros].to_vec())
    }
}

/// Leaves data untouched. Padded modes then require aligned input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoPadding;

impl Padding for NoPadding {
    fn add(&self, data: &[u8], _block_size: usize) -> Vec<u8> {
        data.to_vec()
    }

    fn remove(&self, data: &[u8], _block_size: Option<usize>) -> Result<Vec<u8>> {
        Ok(data.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pkcs7_adds_full_block_when_aligned() {
        let padded = Pkcs7.add(&[0x41; 16], 16);
        assert_eq!(padded.len(), 32);
        assert!(padded[16..].iter().all(|&b| b == 16));
    }

    #[test]
    fn test_pkcs7_partial_block() {
        let padded = Pkcs7.add(b"YELLOW SUBMARINE!", 16);
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[17..], &[15u8; 15]);
        assert_eq!(Pkcs7.remove(&padded, Some(16)).unwrap(), b"YELLOW SUBMARINE!");
    }

    #[test]
    fn test_pkcs7_infers_length_from_last_byte() {
        let data = [1, 2, 3, 4, 5, 3, 3, 3];
        assert_eq!(Pkcs7.remove(&data, None).unwrap(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_pkcs7_rejects_malformed() {
        assert_eq!(Pkcs7.remove(&[], None), Err(CipherModeError::PaddingError));
        assert_eq!(Pkcs7.remove(&[1, 2, 0], None), Err(CipherModeError::PaddingError));
        assert_eq!(Pkcs7.remove(&[1, 2, 9], None), Err(CipherModeError::PaddingError));
        assert_eq!(Pkcs7.remove(&[1, 3, 2, 3], None), Err(CipherModeError::PaddingError));
        // pad length larger than the block
        assert_eq!(Pkcs7.remove(&[5; 8], Some(4)), Err(CipherModeError::PaddingError));
        // misaligned
        assert_eq!(Pkcs7.remove(&[1, 1, 1], Some(2)), Err(CipherModeError::PaddingError));
    }

    #[test]
    fn test_zero_padding() {
        let padded = ZeroPadding.add(b"abc", 8);
        assert_eq!(padded, b"abc\0\0\0\0\0");
        assert_eq!(ZeroPadding.remove(&padded, Some(8)).unwrap(), b"abc");

        // aligned data is left alone
        assert_eq!(ZeroPadding.add(b"abcd", 4), b"abcd");
    }

    #[test]
    fn test_zero_padding_remove_limits() {
        let data = [7, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(ZeroPadding.remove(&data, Some(4)).unwrap(), vec![7, 0, 0, 0, 0]);
        assert_eq!(ZeroPadding.remove(&data, None).unwrap(), vec![7]);
        assert_eq!(ZeroPadding.remove(&data, Some(0)), Err(CipherModeError::InvalidBlockSize));
    }

    #[test]
    fn test_no_padding_is_identity() {
        assert_eq!(NoPadding.add(b"abc", 16), b"abc");
        assert_eq!(NoPadding.remove(b"abc", None).unwrap(), b"abc");
    }
}
