//! Block engine: one block cipher, one chaining mode, one IV and a padding scheme

use std::fmt;

use log::trace;

use crate::error::Result;
use crate::modes::{BlockMode, CipherModes};
use crate::padding::{Padding, Pkcs7};
use crate::BlockCipher;

/// A block cipher bound to a chaining mode, IV and padding scheme.
///
/// Construction validates the parameters; the transform methods take
/// `&self`, so every call starts again from the IV.
pub struct BlockModeCipher<C> {
    cipher: C,
    mode: BlockMode,
    iv: Vec<u8>,
    padding: Box<dyn Padding>,
}

impl<C: BlockCipher> BlockModeCipher<C> {
    /// Binds `cipher` to `mode` and `iv`, with PKCS#7 padding.
    ///
    /// Fails if the cipher reports a zero block size, or if the mode uses an
    /// IV and `iv` is not exactly one block long. ECB ignores `iv`.
    pub fn new(cipher: C, mode: BlockMode, iv: &[u8]) -> Result<Self> {
        let block_size = cipher.block_size();
        CipherModes::validate_block_size(block_size)?;
        if mode.requires_iv() {
            CipherModes::validate_iv_length(iv, block_size)?;
        }

        Ok(Self {
            cipher,
            mode,
            iv: iv.to_vec(),
            padding: Box::new(Pkcs7),
        })
    }

    /// Replaces the padding scheme used by padded modes
    pub fn with_padding(mut self, padding: impl Padding + 'static) -> Self {
        self.padding = Box::new(padding);
        self
    }

    pub fn mode(&self) -> BlockMode {
        self.mode
    }

    pub fn block_size(&self) -> usize {
        self.cipher.block_size()
    }

    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        trace!("{} encrypt, {} bytes", self.mode, plaintext.len());

        let cipher = &self.cipher;
        let iv = self.iv.as_slice();
        match self.mode {
            BlockMode::Ecb => CipherModes::ecb_encrypt(cipher, &self.pad(plaintext)),
            BlockMode::Cbc => CipherModes::cbc_encrypt(cipher, &self.pad(plaintext), iv),
            BlockMode::Pcbc => CipherModes::pcbc_encrypt(cipher, &self.pad(plaintext), iv),
            BlockMode::Cfb => CipherModes::cfb_encrypt(cipher, plaintext, iv),
            BlockMode::Ofb => CipherModes::ofb_encrypt(cipher, plaintext, iv),
            BlockMode::Ctr => CipherModes::ctr_encrypt(cipher, plaintext, iv),
        }
    }

    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        trace!("{} decrypt, {} bytes", self.mode, ciphertext.len());

        let cipher = &self.cipher;
        let iv = self.iv.as_slice();
        let padded = match self.mode {
            BlockMode::Ecb => CipherModes::ecb_decrypt(cipher, ciphertext)?,
            BlockMode::Cbc => CipherModes::cbc_decrypt(cipher, ciphertext, iv)?,
            BlockMode::Pcbc => CipherModes::pcbc_decrypt(cipher, ciphertext, iv)?,
            BlockMode::Cfb => return CipherModes::cfb_decrypt(cipher, ciphertext, iv),
            BlockMode::Ofb => return CipherModes::ofb_decrypt(cipher, ciphertext, iv),
            BlockMode::Ctr => return CipherModes::ctr_decrypt(cipher, ciphertext, iv),
        };

        self.padding.remove(&padded, Some(self.block_size()))
    }

    fn pad(&self, data: &[u8]) -> Vec<u8> {
        self.padding.add(data, self.block_size())
    }
}

impl<C> fmt::Debug for BlockModeCipher<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockModeCipher")
            .field("mode", &self.mode)
            .field("iv_len", &self.iv.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherModeError;
    use crate::padding::{NoPadding, ZeroPadding};
    use crate::testing::DummyCipher;
    use proptest::prelude::*;

    fn engine(mode: BlockMode) -> BlockModeCipher<DummyCipher> {
        BlockModeCipher::new(DummyCipher::new(16, b"test-key-16-byte"), mode, b"initialization16").unwrap()
    }

    #[test]
    fn test_all_modes_integration() {
        let plaintext = b"Integration test message for all modes!";

        for mode in BlockMode::ALL {
            let engine = engine(mode);
            let ciphertext = engine.encrypt(plaintext).unwrap();
            assert_eq!(engine.decrypt(&ciphertext).unwrap(), plaintext, "{mode}");

            if mode.is_padded() {
                assert_eq!(ciphertext.len(), 48, "{mode}");
            } else {
                assert_eq!(ciphertext.len(), plaintext.len(), "{mode}");
            }
        }
    }

    #[test]
    fn test_iv_validated_at_construction() {
        let cipher = DummyCipher::new(16, b"test-key-16-byte");
        let result = BlockModeCipher::new(cipher.clone(), BlockMode::Cbc, b"short");
        assert!(matches!(
            result,
            Err(CipherModeError::InvalidIvLength { expected: 16, actual: 5 })
        ));

        // ECB never looks at the IV
        assert!(BlockModeCipher::new(cipher, BlockMode::Ecb, b"").is_ok());
    }

    #[test]
    fn test_zero_block_size_rejected() {
        let cipher = DummyCipher::new(0, b"key");
        assert!(matches!(
            BlockModeCipher::new(cipher, BlockMode::Ctr, b""),
            Err(CipherModeError::InvalidBlockSize)
        ));
    }

    #[test]
    fn test_unaligned_ciphertext_rejected() {
        let engine = engine(BlockMode::Cbc);
        assert!(matches!(
            engine.decrypt(&[0u8; 17]),
            Err(CipherModeError::UnalignedData { len: 17, block_size: 16 })
        ));
        assert!(engine.decrypt(&[]).is_err());
    }

    #[test]
    fn test_no_padding_requires_alignment() {
        let engine = engine(BlockMode::Cbc).with_padding(NoPadding);
        assert!(engine.encrypt(b"not aligned").is_err());

        let ciphertext = engine.encrypt(&[0x41; 32]).unwrap();
        assert_eq!(ciphertext.len(), 32);
        assert_eq!(engine.decrypt(&ciphertext).unwrap(), vec![0x41; 32]);
    }

    #[test]
    fn test_zero_padding_round_trip() {
        let engine = engine(BlockMode::Ecb).with_padding(ZeroPadding);
        let ciphertext = engine.encrypt(b"abc").unwrap();
        assert_eq!(ciphertext.len(), 16);
        assert_eq!(engine.decrypt(&ciphertext).unwrap(), b"abc");
    }

    proptest! {
        #[test]
        fn prop_round_trip_every_mode(data in proptest::collection::vec(any::<u8>(), 0..100)) {
            for mode in BlockMode::ALL {
                let engine = engine(mode);
                let ciphertext = engine.encrypt(&data).unwrap();
                prop_assert_eq!(engine.decrypt(&ciphertext).unwrap(), data.clone());
            }
        }
    }
}
