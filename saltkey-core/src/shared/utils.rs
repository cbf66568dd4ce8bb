//! Utility functions for the password core
//! 
//! This module contains common utility functions used throughout the password core.

use subtle::ConstantTimeEq;
use crate::shared::constants::SALT_ALPHABET;

/// Compare two byte slices in constant time
///
/// Slices of different length compare unequal.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Check that every character of `salt` belongs to the salt alphabet
pub fn is_salt_string(salt: &str) -> bool {
    salt.bytes().all(|b| SALT_ALPHABET.contains(&b))
}

/// Check that `s` is non-empty lowercase hex with an even length
pub fn is_lower_hex(s: &str) -> bool {
    !s.is_empty()
        && s.len() % 2 == 0
        && s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}
