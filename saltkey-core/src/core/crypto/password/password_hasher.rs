use rand_core::{CryptoRng, OsRng, RngCore};
use zeroize::Zeroizing;
use crate::core::crypto::kdf::derive_key;
use crate::core::crypto::salt::generate_salt_with;
use crate::shared::utils::constant_time_eq;
use crate::shared::{EncodedHash, PasswordResult, Salt};
use super::Options;

/// Salt and hex-encoded derived key produced by one encode call
///
/// The options travel with the credential so it can be verified later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub salt: Salt,
    pub hash: EncodedHash,
    pub options: Options,
}

impl Credential {
    /// Split into `(salt, hash)`
    pub fn into_parts(self) -> (Salt, EncodedHash) {
        (self.salt, self.hash)
    }
}

/// Salted PBKDF2 password hasher
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher {
    options: Options,
}

impl PasswordHasher {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Hash a password under a freshly generated salt
    pub fn encode(&self, password: &str) -> PasswordResult<Credential> {
        self.encode_with_rng(&mut OsRng, password)
    }

    /// Hash a password with a salt drawn from `rng`
    pub fn encode_with_rng<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        password: &str,
    ) -> PasswordResult<Credential> {
        self.options.validate()?;

        let salt = generate_salt_with(rng, self.options.salt_len())?;
        let key = derive_key(
            password.as_bytes(),
            salt.as_bytes(),
            self.options.iterations(),
            self.options.key_len(),
            self.options.hash_function(),
        )?;
        let hash = hex::encode(&*key);

        log::debug!(
            "Encoded password with pbkdf2-{} ({} iterations, {} byte key)",
            self.options.hash_function(),
            self.options.iterations(),
            self.options.key_len()
        );
        Ok(Credential {
            salt,
            hash,
            options: self.options,
        })
    }

    /// Check a password against a stored salt and hex-encoded key
    ///
    /// A mismatch is `Ok(false)`. A stored value that is not valid hex is
    /// also treated as a mismatch. Only an invalid configuration is an error.
    pub fn verify(&self, password: &str, salt: &str, encoded: &str) -> PasswordResult<bool> {
        self.options.validate()?;

        let stored = match hex::decode(encoded) {
            Ok(bytes) => Zeroizing::new(bytes),
            Err(e) => {
                log::debug!("Stored credential is not valid hex: {}", e);
                return Ok(false);
            }
        };

        let computed = derive_key(
            password.as_bytes(),
            salt.as_bytes(),
            self.options.iterations(),
            self.options.key_len(),
            self.options.hash_function(),
        )?;

        Ok(constant_time_eq(&computed, &stored))
    }
}

/// Encode with the default options
pub fn encode(password: &str) -> PasswordResult<Credential> {
    PasswordHasher::default().encode(password)
}

/// Encode with explicit options
pub fn encode_with(password: &str, options: &Options) -> PasswordResult<Credential> {
    PasswordHasher::new(*options).encode(password)
}

/// Verify with the default options
pub fn verify(password: &str, salt: &str, encoded: &str) -> PasswordResult<bool> {
    PasswordHasher::default().verify(password, salt, encoded)
}

/// Verify with explicit options
pub fn verify_with(password: &str, salt: &str, encoded: &str, options: &Options) -> PasswordResult<bool> {
    PasswordHasher::new(*options).verify(password, salt, encoded)
}

/// Verify against a credential using the options stored with it
pub fn verify_credential(password: &str, credential: &Credential) -> PasswordResult<bool> {
    PasswordHasher::new(credential.options).verify(password, &credential.salt, &credential.hash)
}
