//! Self-describing credential strings
//!
//! `$pbkdf2-<hash>$i=<iterations>,l=<key_len>$<salt>$<hex>`
//!
//! The salt length is not written out; it is the salt's character count.

use std::fmt;
use std::str::FromStr;
use crate::core::crypto::kdf::HashFunction;
use crate::shared::constants::{CREDENTIAL_ID_PREFIX, CREDENTIAL_SEPARATOR};
use crate::shared::error::PasswordError;
use crate::shared::utils::{is_lower_hex, is_salt_string};
use super::{Credential, Options};

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = CREDENTIAL_SEPARATOR;
        write!(
            f,
            "{sep}{}-{}{sep}i={},l={}{sep}{}{sep}{}",
            CREDENTIAL_ID_PREFIX,
            self.options.hash_function(),
            self.options.iterations(),
            self.options.key_len(),
            self.salt,
            self.hash,
        )
    }
}

impl FromStr for Credential {
    type Err = PasswordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(CREDENTIAL_SEPARATOR).collect();
        if parts.len() != 5 || !parts[0].is_empty() {
            return Err(PasswordError::validation("Invalid credential string format"));
        }

        let hash_function = parse_identifier(parts[1])?;
        let (iterations, key_len) = parse_params(parts[2])?;

        let salt = parts[3];
        if salt.is_empty() || !is_salt_string(salt) {
            return Err(PasswordError::validation("Invalid salt in credential string"));
        }

        let hash = parts[4];
        if !is_lower_hex(hash) || hash.len() != key_len.saturating_mul(2) {
            return Err(PasswordError::validation("Invalid key encoding in credential string"));
        }

        let options = Options::new(salt.len(), iterations, key_len, hash_function)
            .map_err(|e| PasswordError::validation(e.to_string()))?;

        Ok(Credential {
            salt: salt.to_string(),
            hash: hash.to_string(),
            options,
        })
    }
}

fn parse_identifier(id: &str) -> Result<HashFunction, PasswordError> {
    id.strip_prefix(CREDENTIAL_ID_PREFIX)
        .and_then(|rest| rest.strip_prefix('-'))
        .ok_or_else(|| PasswordError::validation(format!("Unknown credential identifier: {}", id)))?
        .parse()
        .map_err(|e: PasswordError| PasswordError::validation(e.to_string()))
}

fn parse_params(params: &str) -> Result<(u32, usize), PasswordError> {
    let mut iterations = None;
    let mut key_len = None;

    for pair in params.split(',') {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| PasswordError::validation(format!("Malformed parameter: {}", pair)))?;
        match name {
            "i" if iterations.is_none() => {
                iterations = Some(value.parse::<u32>().map_err(|_| {
                    PasswordError::validation("Invalid iterations in credential string")
                })?);
            }
            "l" if key_len.is_none() => {
                key_len = Some(value.parse::<usize>().map_err(|_| {
                    PasswordError::validation("Invalid key length in credential string")
                })?);
            }
            _ => {
                return Err(PasswordError::validation(format!("Unexpected parameter: {}", name)));
            }
        }
    }

    match (iterations, key_len) {
        (Some(i), Some(l)) => Ok((i, l)),
        _ => Err(PasswordError::validation("Missing parameters in credential string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::crypto::password::{encode_with, verify_credential};

    fn options() -> Options {
        Options::new(12, 5, 20, HashFunction::Sha256).unwrap()
    }

    #[test]
    fn test_format() {
        let credential = Credential {
            salt: "abcDEF123456".to_string(),
            hash: "00".repeat(20),
            options: options(),
        };
        assert_eq!(
            credential.to_string(),
            format!("$pbkdf2-sha256$i=5,l=20$abcDEF123456${}", "00".repeat(20))
        );
    }

    #[test]
    fn test_parse_and_verify() {
        let credential = encode_with("hunter2", &options()).unwrap();
        let stored = credential.to_string();

        let parsed: Credential = stored.parse().unwrap();
        assert_eq!(parsed, credential);
        assert!(verify_credential("hunter2", &parsed).unwrap());
        assert!(!verify_credential("hunter3", &parsed).unwrap());
    }

    #[test]
    fn test_parse_sha3_identifier() {
        let options = options().with_hash_function(HashFunction::Sha3_512).unwrap();
        let credential = encode_with("pw", &options).unwrap();
        let parsed: Credential = credential.to_string().parse().unwrap();
        assert_eq!(parsed.options.hash_function(), HashFunction::Sha3_512);
    }

    #[test]
    fn test_parse_errors() {
        let hash = "ab".repeat(4);
        let cases = [
            String::new(),
            format!("pbkdf2-sha256$i=1,l=4$salt${}", hash),
            format!("$bcrypt-sha256$i=1,l=4$salt${}", hash),
            format!("$pbkdf2-md5$i=1,l=4$salt${}", hash),
            format!("$pbkdf2-sha256$i=0,l=4$salt${}", hash),
            format!("$pbkdf2-sha256$i=x,l=4$salt${}", hash),
            format!("$pbkdf2-sha256$i=1$salt${}", hash),
            format!("$pbkdf2-sha256$i=1,i=2,l=4$salt${}", hash),
            format!("$pbkdf2-sha256$i=1,l=4,p=1$salt${}", hash),
            format!("$pbkdf2-sha256$i=1,l=4$$${}", hash),
            format!("$pbkdf2-sha256$i=1,l=4$sa-lt${}", hash),
            format!("$pbkdf2-sha256$i=1,l=5$salt${}", hash),
            format!("$pbkdf2-sha256$i=1,l=4$salt${}", hash.to_uppercase()),
            format!("$pbkdf2-sha256$i=1,l=4$salt${}$", hash),
        ];
        for case in cases {
            let result = case.parse::<Credential>();
            assert!(
                matches!(result, Err(PasswordError::Validation(_))),
                "expected validation error for {:?}",
                case
            );
        }
    }
}
