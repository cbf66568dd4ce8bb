//! Saltkey Core
//! 
//! Salted password hashing with PBKDF2.
//! Derives a verifiable hash from a plaintext password and later confirms
//! whether a candidate password matches it.
//! 
//! ## Architecture
//! 
//! - **Core**: salt generation, key derivation, encode/verify, auditing
//! - **Shared**: common types, constants, errors, and utilities
//! - **FFI**: C-compatible bindings (feature `ffi`)
//! 
//! ## Security Features
//! 
//! - Salts from the operating system CSPRNG, never a weaker fallback
//! - Constant-time comparison of derived keys
//! - Zeroization of derived key material
//! - Invalid configurations rejected at call time
//! 
//! ## Usage
//! 
//! ```rust
//! use saltkey_core::{encode_with, verify_with, HashFunction, Options};
//! 
//! let options = Options::new(32, 1_000, 64, HashFunction::Sha256)?;
//! let credential = encode_with("correct horse", &options)?;
//! 
//! assert!(verify_with("correct horse", &credential.salt, &credential.hash, &options)?);
//! assert!(!verify_with("battery staple", &credential.salt, &credential.hash, &options)?);
//! 
//! // The self-describing form carries the options with it
//! let stored = credential.to_string();
//! let parsed: saltkey_core::Credential = stored.parse()?;
//! assert!(saltkey_core::verify_credential("correct horse", &parsed)?);
//! # Ok::<(), saltkey_core::PasswordError>(())
//! ```

pub mod core;
pub mod shared;

// Re-export the public surface
pub use crate::core::crypto::kdf::{derive_key, HashFunction};
pub use crate::core::crypto::password::{
    encode, encode_with, verify, verify_credential, verify_with, Credential, Options,
    PasswordHasher, DEFAULT_OPTIONS,
};
pub use crate::core::crypto::salt::{generate_salt, generate_salt_with};
pub use crate::core::crypto::security_audit::{SecurityAuditResult, SecurityAuditor};
pub use shared::error::PasswordError;
pub use shared::types::{EncodedHash, PasswordResult, Salt};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

// Feature flags
#[cfg(feature = "ffi")]
pub mod ffi;

#[cfg(feature = "ffi")]
pub use ffi::*;

/// Initialize logging
///
/// Honors `RUST_LOG`; falls back to the build's default level. Safe to call
/// more than once.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or(shared::constants::LOG_LEVEL);
    if env_logger::Builder::from_env(env).try_init().is_ok() {
        log::info!("{} {} initialized", NAME, VERSION);
    }
}
