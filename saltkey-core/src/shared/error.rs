//! Error handling for the password core
//! 
//! This module defines the error types used throughout the password core.

use thiserror::Error;

/// Password core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Configuration error: {0}")]
    Config(String),
    
    #[error("Cryptographic error: {0}")]
    Crypto(String),

    #[error("Entropy source error: {0}")]
    Entropy(String),
    
    #[error("Validation error: {0}")]
    Validation(String),
    
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PasswordError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
    
    /// Create a cryptographic error
    pub fn crypto(message: impl Into<String>) -> Self {
        Self::Crypto(message.into())
    }

    /// Create an entropy source error
    pub fn entropy(message: impl Into<String>) -> Self {
        Self::Entropy(message.into())
    }
    
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
    
    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<hex::FromHexError> for PasswordError {
    fn from(err: hex::FromHexError) -> Self {
        Self::validation(format!("Hex decoding error: {}", err))
    }
}

impl From<sha2::digest::InvalidLength> for PasswordError {
    fn from(err: sha2::digest::InvalidLength) -> Self {
        Self::crypto(format!("PBKDF2 error: {}", err))
    }
}

impl From<rand_core::Error> for PasswordError {
    fn from(err: rand_core::Error) -> Self {
        Self::entropy(format!("OS random source failed: {}", err))
    }
}

impl From<config::ConfigError> for PasswordError {
    fn from(err: config::ConfigError) -> Self {
        Self::config(format!("Failed to load configuration: {}", err))
    }
}
