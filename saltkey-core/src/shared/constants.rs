//! Constants for the password core
//! 
//! This module contains all constants used throughout the password core.

// Default configuration
pub const DEFAULT_SALT_LEN: usize = 256;
pub const DEFAULT_ITERATIONS: u32 = 10_000;
pub const DEFAULT_KEY_LEN: usize = 512;

// Salt alphabet: digits, uppercase, lowercase
pub const SALT_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

// Audit thresholds
pub const RECOMMENDED_MIN_ITERATIONS: u32 = 10_000;
pub const RECOMMENDED_MIN_SALT_LEN: usize = 16;

// Credential string format
pub const CREDENTIAL_ID_PREFIX: &str = "pbkdf2";
pub const CREDENTIAL_SEPARATOR: char = '$';

// Configuration
pub const ENV_PREFIX: &str = "SALTKEY";

// FFI limits
pub const FFI_MAX_INPUT_LENGTH: usize = 64 * 1024;

// Development and testing constants
pub const LOG_LEVEL: &str = if cfg!(debug_assertions) { "debug" } else { "info" };
