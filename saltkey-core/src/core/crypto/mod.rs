//! Cryptographic functionality for the password core
//! 
//! This module provides salt generation, PBKDF2 key derivation, password
//! encoding and verification, and configuration auditing.
//! 
//! SECURITY: derived keys and raw random bytes are held in `Zeroizing`
//! buffers, and verification compares keys in constant time.

pub mod salt;
pub mod kdf;
pub mod password;
pub mod security_audit;

// Re-export all public items from submodules
pub use salt::*;
pub use kdf::*;
pub use password::*;
pub use security_audit::*;
