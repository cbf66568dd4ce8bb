use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::core::crypto::kdf::HashFunction;
use crate::shared::constants::*;
use crate::shared::error::PasswordError;
use crate::shared::PasswordResult;

/// Password hashing configuration
///
/// Every field must be at least 1. Values built through [`Options::new`] are
/// checked up front; values obtained any other way (deserialization) are
/// checked again on every encode and verify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Options {
    salt_len: usize,
    iterations: u32,
    key_len: usize,
    hash_function: HashFunction,
}

/// `{256, 10000, 512, sha512}`
pub const DEFAULT_OPTIONS: Options = Options {
    salt_len: DEFAULT_SALT_LEN,
    iterations: DEFAULT_ITERATIONS,
    key_len: DEFAULT_KEY_LEN,
    hash_function: HashFunction::Sha512,
};

impl Default for Options {
    fn default() -> Self {
        DEFAULT_OPTIONS
    }
}

#[derive(Deserialize)]
struct OptionsSource {
    salt_len: usize,
    iterations: u32,
    key_len: usize,
    hash_function: String,
}

impl Options {
    pub fn new(
        salt_len: usize,
        iterations: u32,
        key_len: usize,
        hash_function: HashFunction,
    ) -> PasswordResult<Self> {
        let options = Self {
            salt_len,
            iterations,
            key_len,
            hash_function,
        };
        options.validate()?;
        Ok(options)
    }

    pub fn salt_len(&self) -> usize {
        self.salt_len
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn key_len(&self) -> usize {
        self.key_len
    }

    pub fn hash_function(&self) -> HashFunction {
        self.hash_function
    }

    pub fn with_salt_len(self, salt_len: usize) -> PasswordResult<Self> {
        Self::new(salt_len, self.iterations, self.key_len, self.hash_function)
    }

    pub fn with_iterations(self, iterations: u32) -> PasswordResult<Self> {
        Self::new(self.salt_len, iterations, self.key_len, self.hash_function)
    }

    pub fn with_key_len(self, key_len: usize) -> PasswordResult<Self> {
        Self::new(self.salt_len, self.iterations, key_len, self.hash_function)
    }

    pub fn with_hash_function(self, hash_function: HashFunction) -> PasswordResult<Self> {
        Self::new(self.salt_len, self.iterations, self.key_len, hash_function)
    }

    /// Reject zero lengths and a zero iteration count
    pub fn validate(&self) -> PasswordResult<()> {
        if self.salt_len == 0 {
            return Err(PasswordError::config("Salt length must be at least 1"));
        }
        if self.iterations == 0 {
            return Err(PasswordError::config("Iteration count must be at least 1"));
        }
        if self.key_len == 0 {
            return Err(PasswordError::config("Key length must be at least 1"));
        }
        Ok(())
    }

    /// Load configuration from defaults, an optional file, then the environment
    ///
    /// Environment keys are `SALTKEY_SALT_LEN`, `SALTKEY_ITERATIONS`,
    /// `SALTKEY_KEY_LEN` and `SALTKEY_HASH_FUNCTION`; a `.env` file in the
    /// working directory is read first if present. A file passed in must exist.
    pub fn load(file: Option<&Path>) -> PasswordResult<Self> {
        dotenv::dotenv().ok();

        let mut builder = config::Config::builder()
            .set_default("salt_len", DEFAULT_SALT_LEN as i64)?
            .set_default("iterations", DEFAULT_ITERATIONS as i64)?
            .set_default("key_len", DEFAULT_KEY_LEN as i64)?
            .set_default("hash_function", HashFunction::default().as_str())?;
        if let Some(path) = file {
            log::debug!("Loading password options from {}", path.display());
            builder = builder.add_source(config::File::from(path).required(true));
        }
        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let source: OptionsSource = settings.try_deserialize()?;
        let hash_function = source.hash_function.parse()?;
        Self::new(source.salt_len, source.iterations, source.key_len, hash_function)
    }

    /// Audit this configuration against recommended minimums
    pub fn audit(&self) -> crate::core::crypto::SecurityAuditResult {
        crate::core::crypto::SecurityAuditor::audit_options(self)
    }
}
