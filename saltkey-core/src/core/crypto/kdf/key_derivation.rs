use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::{Sha256, Sha384, Sha512};
use sha3::{Sha3_256, Sha3_512};
use zeroize::Zeroizing;
use crate::shared::error::PasswordError;
use crate::shared::PasswordResult;
use super::HashFunction;

/// Derive `key_len` bytes from `password` and `salt` with PBKDF2-HMAC
///
/// Every call runs the full iteration count. The returned buffer is
/// zeroized on drop.
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    key_len: usize,
    hash_function: HashFunction,
) -> PasswordResult<Zeroizing<Vec<u8>>> {
    if iterations == 0 {
        return Err(PasswordError::config("PBKDF2 iterations must be at least 1"));
    }
    if key_len == 0 {
        return Err(PasswordError::config("Derived key length must be at least 1"));
    }

    let mut key = Zeroizing::new(vec![0u8; key_len]);
    match hash_function {
        HashFunction::Sha256 => pbkdf2::<Hmac<Sha256>>(password, salt, iterations, &mut key)?,
        HashFunction::Sha384 => pbkdf2::<Hmac<Sha384>>(password, salt, iterations, &mut key)?,
        HashFunction::Sha512 => pbkdf2::<Hmac<Sha512>>(password, salt, iterations, &mut key)?,
        HashFunction::Sha3_256 => pbkdf2::<Hmac<Sha3_256>>(password, salt, iterations, &mut key)?,
        HashFunction::Sha3_512 => pbkdf2::<Hmac<Sha3_512>>(password, salt, iterations, &mut key)?,
    }

    log::trace!(
        "Derived {} byte key with pbkdf2-{} ({} iterations)",
        key_len,
        hash_function,
        iterations
    );
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        // PBKDF2-HMAC-SHA256, P = "password", S = "salt", c = 1, dkLen = 32
        let key = derive_key(b"password", b"salt", 1, 32, HashFunction::Sha256).unwrap();
        assert_eq!(
            hex::encode(&*key),
            "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
        );
    }

    #[test]
    fn test_sha512_vector() {
        // PBKDF2-HMAC-SHA512, P = "password", S = "salt", c = 1, dkLen = 64
        let key = derive_key(b"password", b"salt", 1, 64, HashFunction::Sha512).unwrap();
        assert_eq!(
            hex::encode(&*key),
            "867f70cf1ade02cff3752599a3a53dc4af34c7a669815ae5d513554e1c8cf252\
             c02d470a285a0501bad999bfe943c08f050235d7d68b1da55e63f73b60a57fce"
        );
    }

    #[test]
    fn test_output_length_matches_request() {
        for hash in HashFunction::ALL {
            for len in [1usize, 16, 65, 512] {
                let key = derive_key(b"pw", b"salt", 2, len, hash).unwrap();
                assert_eq!(key.len(), len);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let a = derive_key(b"secret", b"NaCl", 50, 96, HashFunction::Sha512).unwrap();
        let b = derive_key(b"secret", b"NaCl", 50, 96, HashFunction::Sha512).unwrap();
        assert_eq!(*a, *b);
    }

    #[test]
    fn test_inputs_change_output() {
        let base = derive_key(b"secret", b"NaCl", 10, 32, HashFunction::Sha512).unwrap();
        let other_salt = derive_key(b"secret", b"NaCm", 10, 32, HashFunction::Sha512).unwrap();
        let other_iters = derive_key(b"secret", b"NaCl", 11, 32, HashFunction::Sha512).unwrap();
        let other_hash = derive_key(b"secret", b"NaCl", 10, 32, HashFunction::Sha256).unwrap();
        assert_ne!(*base, *other_salt);
        assert_ne!(*base, *other_iters);
        assert_ne!(*base, *other_hash);
    }

    #[test]
    fn test_invalid_parameters() {
        let err = derive_key(b"pw", b"salt", 0, 32, HashFunction::Sha512).unwrap_err();
        assert!(matches!(err, PasswordError::Config(_)));
        let err = derive_key(b"pw", b"salt", 1, 0, HashFunction::Sha512).unwrap_err();
        assert!(matches!(err, PasswordError::Config(_)));
    }

    #[test]
    fn test_empty_password_and_salt() {
        let key = derive_key(b"", b"", 1, 32, HashFunction::Sha256).unwrap();
        assert_eq!(key.len(), 32);
    }
}
