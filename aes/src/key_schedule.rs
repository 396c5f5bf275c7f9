//! Key expansion (FIPS-197 §5.2)

use cipher_modes::{CipherModeError, Result};

use crate::tables::{RCON, SBOX};

/// Expands a 16, 24 or 32 byte key into `rounds + 1` round keys.
pub(crate) fn expand_key(key: &[u8]) -> Result<Vec<[u8; 16]>> {
    let nk = match key.len() {
        16 | 24 | 32 => key.len() / 4,
        other => return Err(CipherModeError::InvalidKeyLength(other)),
    };
    let rounds = nk + 6;
    let total_words = 4 * (rounds + 1);

    let mut words: Vec<[u8; 4]> = key
        .chunks_exact(4)
        .map(|w| [w[0], w[1], w[2], w[3]])
        .collect();

    for i in nk..total_words {
        let mut temp = words[i - 1];
        if i % nk == 0 {
            temp.rotate_left(1);
            sub_word(&mut temp);
            temp[0] ^= RCON[i / nk - 1];
        } else if nk > 6 && i % nk == 4 {
            sub_word(&mut temp);
        }

        let previous = words[i - nk];
        words.push(core::array::from_fn(|j| previous[j] ^ temp[j]));
    }

    Ok(words
        .chunks_exact(4)
        .map(|round| core::array::from_fn(|b| round[b / 4][b % 4]))
        .collect())
}

fn sub_word(word: &mut [u8; 4]) {
    for byte in word.iter_mut() {
        *byte = SBOX[*byte as usize];
    }
}
