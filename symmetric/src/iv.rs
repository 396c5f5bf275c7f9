//! Random initialization vectors

use rand::rngs::OsRng;
use rand::RngCore;

/// Returns `block_size` bytes from the operating system CSPRNG.
///
/// There is no fallback source: if the OS cannot supply randomness this
/// panics. `random_iv(0)` is an empty vector.
pub fn random_iv(block_size: usize) -> Vec<u8> {
    let mut iv = vec![0u8; block_size];
    OsRng.fill_bytes(&mut iv);
    iv
}
