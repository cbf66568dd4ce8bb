//! Password management for the password core
//!
//! This module handles password encoding, verification, and configuration.

pub mod password_hasher;
pub mod password_config;
pub mod credential_string;

// Re-export all public items from submodules
pub use password_hasher::*;
pub use password_config::*;
