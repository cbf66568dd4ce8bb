use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::shared::error::PasswordError;

/// Hash primitive used as the HMAC inside PBKDF2
///
/// Serialized as its tag; deserialization goes through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum HashFunction {
    Sha256,
    Sha384,
    #[default]
    Sha512,
    Sha3_256,
    Sha3_512,
}

impl HashFunction {
    pub const ALL: [HashFunction; 5] = [
        HashFunction::Sha256,
        HashFunction::Sha384,
        HashFunction::Sha512,
        HashFunction::Sha3_256,
        HashFunction::Sha3_512,
    ];

    /// Tag used in configuration and credential strings
    pub fn as_str(&self) -> &'static str {
        match self {
            HashFunction::Sha256 => "sha256",
            HashFunction::Sha384 => "sha384",
            HashFunction::Sha512 => "sha512",
            HashFunction::Sha3_256 => "sha3-256",
            HashFunction::Sha3_512 => "sha3-512",
        }
    }

    /// Digest length in bytes
    pub fn output_len(&self) -> usize {
        match self {
            HashFunction::Sha256 | HashFunction::Sha3_256 => 32,
            HashFunction::Sha384 => 48,
            HashFunction::Sha512 | HashFunction::Sha3_512 => 64,
        }
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashFunction {
    type Err = PasswordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(HashFunction::Sha256),
            "sha384" | "sha-384" => Ok(HashFunction::Sha384),
            "sha512" | "sha-512" => Ok(HashFunction::Sha512),
            "sha3-256" | "sha3_256" => Ok(HashFunction::Sha3_256),
            "sha3-512" | "sha3_512" => Ok(HashFunction::Sha3_512),
            other => Err(PasswordError::config(format!(
                "Unsupported hash function: {:?}",
                other
            ))),
        }
    }
}

impl TryFrom<String> for HashFunction {
    type Error = PasswordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HashFunction> for &'static str {
    fn from(hash_function: HashFunction) -> Self {
        hash_function.as_str()
    }
}
