//! Key derivation for the password core
//!
//! This module wraps PBKDF2 over the supported HMAC hash primitives.

pub mod key_derivation;
pub mod hash_function;

// Re-export all public items from submodules
pub use key_derivation::*;
pub use hash_function::*;
