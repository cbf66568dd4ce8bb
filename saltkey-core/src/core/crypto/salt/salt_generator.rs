use rand_core::{CryptoRng, OsRng, RngCore};
use zeroize::Zeroizing;
use crate::shared::constants::SALT_ALPHABET;
use crate::shared::PasswordResult;

/// Generate a printable salt of `length` characters
///
/// Each character comes from one byte of the OS random source reduced
/// modulo 62 into [`SALT_ALPHABET`]. The slight bias toward the first
/// eight symbols is kept so salts match those produced by earlier
/// deployments. A zero `length` yields an empty string.
pub fn generate_salt(length: usize) -> PasswordResult<String> {
    generate_salt_with(&mut OsRng, length)
}

/// Generate a salt from a caller-supplied secure random source
///
/// A failing source is an error; nothing falls back to weaker randomness.
pub fn generate_salt_with<R: RngCore + CryptoRng>(rng: &mut R, length: usize) -> PasswordResult<String> {
    let mut raw = Zeroizing::new(vec![0u8; length]);
    rng.try_fill_bytes(&mut raw)?;

    let salt: String = raw
        .iter()
        .map(|byte| SALT_ALPHABET[(*byte as usize) % SALT_ALPHABET.len()] as char)
        .collect();
    Ok(salt)
}
