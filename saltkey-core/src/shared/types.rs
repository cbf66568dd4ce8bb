// Basic types for password operations

/// Salt string drawn from the 62-symbol alphabet
pub type Salt = String;

/// Lowercase hex encoding of a derived key
pub type EncodedHash = String;

/// Result type used throughout the password core
pub type PasswordResult<T> = Result<T, crate::shared::error::PasswordError>;
