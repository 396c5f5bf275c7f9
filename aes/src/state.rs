//! The AES state and its round transformations

use crate::tables::{INV_SBOX, SBOX};

/// One AES block as a 4x4 byte matrix.
///
/// Bytes are laid out column by column, so `bytes[col * 4 + row]` lands in
/// `data[row][col]`.
#[derive(Clone, Copy)]
pub(crate) struct State {
    data: [[u8; 4]; 4],
}

impl State {
    pub(crate) fn new(bytes: &[u8; 16]) -> Self {
        let mut data = [[0u8; 4]; 4];
        for col in 0..4 {
            for row in 0..4 {
                data[row][col] = bytes[col * 4 + row];
            }
        }
        State { data }
    }

    pub(crate) fn to_bytes(self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        for col in 0..4 {
            for row in 0..4 {
                bytes[col * 4 + row] = self.data[row][col];
            }
        }
        bytes
    }

    pub(crate) fn sub_bytes(&mut self) {
        self.substitute(&SBOX);
    }

    pub(crate) fn inv_sub_bytes(&mut self) {
        self.substitute(&INV_SBOX);
    }

    fn substitute(&mut self, table: &[u8; 256]) {
        for row in self.data.iter_mut() {
            for byte in row.iter_mut() {
                *byte = table[*byte as usize];
            }
        }
    }

    /// Row `r` rotates left by `r` positions
    pub(crate) fn shift_rows(&mut self) {
        for row in 1..4 {
            self.data[row].rotate_left(row);
        }
    }

    pub(crate) fn inv_shift_rows(&mut self) {
        for row in 1..4 {
            self.data[row].rotate_right(row);
        }
    }

    /// Multiplies each column by
    ///
    /// ```text
    /// [2 3 1 1]
    /// [1 2 3 1]
    /// [1 1 2 3]
    /// [3 1 1 2]
    /// ```
    pub(crate) fn mix_columns(&mut self) {
        self.mix_with([0x02, 0x03, 0x01, 0x01]);
    }

    /// Inverse of [`State::mix_columns`], coefficients `[e b d 9]`
    pub(crate) fn inv_mix_columns(&mut self) {
        self.mix_with([0x0e, 0x0b, 0x0d, 0x09]);
    }

    // Both matrices are circulant: row r is the coefficient row rotated right by r.
    fn mix_with(&mut self, coefficients: [u8; 4]) {
        for col in 0..4 {
            let column = [
                self.data[0][col],
                self.data[1][col],
                self.data[2][col],
                self.data[3][col],
            ];

            for row in 0..4 {
                self.data[row][col] = (0..4).fold(0, |acc, i| {
                    acc ^ gf_mult(coefficients[(i + 4 - row) % 4], column[i])
                });
            }
        }
    }

    pub(crate) fn add_round_key(&mut self, round_key: &[u8; 16]) {
        for col in 0..4 {
            for row in 0..4 {
                self.data[row][col] ^= round_key[col * 4 + row];
            }
        }
    }
}

/// Multiplication in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1
pub(crate) fn gf_mult(mut a: u8, mut b: u8) -> u8 {
    let mut result = 0;

    for _ in 0..8 {
        if b & 1 != 0 {
            result ^= a;
        }
        let high_bit = a & 0x80;
        a <<= 1;
        if high_bit != 0 {
            a ^= 0x1b;
        }
        b >>= 1;
    }
    result
}
