//! FFI bindings for the password core
//! 
//! This module provides C-compatible function bindings for encode and verify
//! under the default options, plus the self-describing credential form.
//! 
//! SECURITY: This module implements hardened FFI boundaries with:
//! - Null pointer and UTF-8 validation on every input
//! - Input length limits
//! - Error codes that don't leak sensitive information

use std::ffi::{CStr, CString};
use std::ptr;
use libc::{c_char, c_int};
use crate::core::crypto::password::{encode, verify, verify_credential, Credential};
use crate::shared::constants::FFI_MAX_INPUT_LENGTH;
use crate::shared::error::PasswordError;

pub const SALTKEY_OK: c_int = 0;
pub const SALTKEY_MATCH: c_int = 1;
pub const SALTKEY_MISMATCH: c_int = 0;
pub const SALTKEY_ERR_NULL_POINTER: c_int = -1;
pub const SALTKEY_ERR_INVALID_UTF8: c_int = -2;
pub const SALTKEY_ERR_INPUT_TOO_LONG: c_int = -3;
pub const SALTKEY_ERR_ENCODE_FAILED: c_int = -4;
pub const SALTKEY_ERR_VERIFY_FAILED: c_int = -5;
pub const SALTKEY_ERR_STRING_CONVERSION: c_int = -6;
pub const SALTKEY_ERR_INVALID_CREDENTIAL: c_int = -7;

/// Salt and hex-encoded key returned by [`saltkey_encode`]
///
/// Free with [`saltkey_credential_free`].
#[repr(C)]
pub struct SaltkeyCredential {
    pub salt: *mut c_char,
    pub hash: *mut c_char,
}

/// Read a C string argument
///
/// # Safety
///
/// `input` must be null or point to a NUL-terminated string.
unsafe fn read_input<'a>(input: *const c_char) -> Result<&'a str, c_int> {
    if input.is_null() {
        return Err(SALTKEY_ERR_NULL_POINTER);
    }

    let input_str = CStr::from_ptr(input)
        .to_str()
        .map_err(|_| SALTKEY_ERR_INVALID_UTF8)?;

    if input_str.len() > FFI_MAX_INPUT_LENGTH {
        return Err(SALTKEY_ERR_INPUT_TOO_LONG);
    }

    Ok(input_str)
}

fn into_c_string(value: String) -> Result<*mut c_char, c_int> {
    CString::new(value)
        .map(CString::into_raw)
        .map_err(|_| SALTKEY_ERR_STRING_CONVERSION)
}

fn verify_result(result: Result<bool, PasswordError>) -> c_int {
    match result {
        Ok(true) => SALTKEY_MATCH,
        Ok(false) => SALTKEY_MISMATCH,
        Err(e) => {
            log::warn!("FFI verify failed: {}", e);
            SALTKEY_ERR_VERIFY_FAILED
        }
    }
}

/// Encode a password with the default options
///
/// On success fills `out` and returns `SALTKEY_OK`.
///
/// # Safety
///
/// `password` must be null or a NUL-terminated string; `out` must be null or
/// point to writable memory for one `SaltkeyCredential`.
#[no_mangle]
pub unsafe extern "C" fn saltkey_encode(password: *const c_char, out: *mut SaltkeyCredential) -> c_int {
    if out.is_null() {
        return SALTKEY_ERR_NULL_POINTER;
    }
    let password = match read_input(password) {
        Ok(p) => p,
        Err(code) => return code,
    };

    let (salt, hash) = match encode(password) {
        Ok(credential) => credential.into_parts(),
        Err(e) => {
            log::warn!("FFI encode failed: {}", e);
            return SALTKEY_ERR_ENCODE_FAILED;
        }
    };

    let salt = match into_c_string(salt) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let hash = match into_c_string(hash) {
        Ok(h) => h,
        Err(code) => {
            saltkey_string_free(salt);
            return code;
        }
    };

    out.write(SaltkeyCredential { salt, hash });
    SALTKEY_OK
}

/// Verify a password against a salt and hex-encoded key under the default options
///
/// Returns `SALTKEY_MATCH`, `SALTKEY_MISMATCH`, or a negative error code.
///
/// # Safety
///
/// Each argument must be null or a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn saltkey_verify(
    password: *const c_char,
    salt: *const c_char,
    hash: *const c_char,
) -> c_int {
    let inputs = (read_input(password), read_input(salt), read_input(hash));
    let (password, salt, hash) = match inputs {
        (Ok(p), Ok(s), Ok(h)) => (p, s, h),
        (Err(code), _, _) | (_, Err(code), _) | (_, _, Err(code)) => return code,
    };

    verify_result(verify(password, salt, hash))
}

/// Encode a password with the default options into a self-describing string
///
/// Returns null on failure. Free with [`saltkey_string_free`].
///
/// # Safety
///
/// `password` must be null or a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn saltkey_encode_string(password: *const c_char) -> *mut c_char {
    let Ok(password) = read_input(password) else {
        return ptr::null_mut();
    };

    match encode(password) {
        Ok(credential) => into_c_string(credential.to_string()).unwrap_or(ptr::null_mut()),
        Err(e) => {
            log::warn!("FFI encode failed: {}", e);
            ptr::null_mut()
        }
    }
}

/// Verify a password against a self-describing credential string
///
/// # Safety
///
/// Each argument must be null or a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn saltkey_verify_string(password: *const c_char, stored: *const c_char) -> c_int {
    let (password, stored) = match (read_input(password), read_input(stored)) {
        (Ok(p), Ok(s)) => (p, s),
        (Err(code), _) | (_, Err(code)) => return code,
    };

    let credential: Credential = match stored.parse() {
        Ok(c) => c,
        Err(_) => return SALTKEY_ERR_INVALID_CREDENTIAL,
    };
    verify_result(verify_credential(password, &credential))
}

/// Free a string returned by this library
///
/// # Safety
///
/// `s` must be null or a pointer returned by this library that has not
/// been freed yet.
#[no_mangle]
pub unsafe extern "C" fn saltkey_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// Free both strings of a credential filled by [`saltkey_encode`]
///
/// # Safety
///
/// `credential` must be null or point to a credential filled by
/// [`saltkey_encode`] whose strings have not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn saltkey_credential_free(credential: *mut SaltkeyCredential) {
    if credential.is_null() {
        return;
    }
    let credential = &mut *credential;
    saltkey_string_free(credential.salt);
    saltkey_string_free(credential.hash);
    credential.salt = ptr::null_mut();
    credential.hash = ptr::null_mut();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> CString {
        CString::new(s).unwrap()
    }

    unsafe fn owned(s: *mut c_char) -> String {
        CStr::from_ptr(s).to_str().unwrap().to_string()
    }

    #[test]
    fn test_encode_and_verify() {
        let password = c("ffi password");
        let mut credential = SaltkeyCredential {
            salt: ptr::null_mut(),
            hash: ptr::null_mut(),
        };

        unsafe {
            assert_eq!(saltkey_encode(password.as_ptr(), &mut credential), SALTKEY_OK);
            let salt = owned(credential.salt);
            let hash = owned(credential.hash);
            assert_eq!(salt.len(), 256);
            assert_eq!(hash.len(), 1024);

            let salt = c(&salt);
            let hash = c(&hash);
            assert_eq!(
                saltkey_verify(password.as_ptr(), salt.as_ptr(), hash.as_ptr()),
                SALTKEY_MATCH
            );
            let wrong = c("other password");
            assert_eq!(
                saltkey_verify(wrong.as_ptr(), salt.as_ptr(), hash.as_ptr()),
                SALTKEY_MISMATCH
            );

            saltkey_credential_free(&mut credential);
            assert!(credential.salt.is_null());
            assert!(credential.hash.is_null());
        }
    }

    #[test]
    fn test_null_pointers() {
        let password = c("pw");
        unsafe {
            assert_eq!(saltkey_encode(ptr::null(), ptr::null_mut()), SALTKEY_ERR_NULL_POINTER);
            assert_eq!(
                saltkey_encode(password.as_ptr(), ptr::null_mut()),
                SALTKEY_ERR_NULL_POINTER
            );
            assert_eq!(
                saltkey_verify(password.as_ptr(), ptr::null(), password.as_ptr()),
                SALTKEY_ERR_NULL_POINTER
            );
            assert!(saltkey_encode_string(ptr::null()).is_null());
            saltkey_string_free(ptr::null_mut());
            saltkey_credential_free(ptr::null_mut());
        }
    }

    #[test]
    fn test_invalid_utf8() {
        let bytes = [0xffu8, 0xfe, 0];
        let salt = c("salt");
        let hash = c("00");
        unsafe {
            assert_eq!(
                saltkey_verify(bytes.as_ptr() as *const c_char, salt.as_ptr(), hash.as_ptr()),
                SALTKEY_ERR_INVALID_UTF8
            );
        }
    }

    #[test]
    fn test_credential_string_round_trip() {
        let password = c("stored form");
        unsafe {
            let stored = saltkey_encode_string(password.as_ptr());
            assert!(!stored.is_null());
            assert!(owned(stored).starts_with("$pbkdf2-sha512$i=10000,l=512$"));

            assert_eq!(saltkey_verify_string(password.as_ptr(), stored), SALTKEY_MATCH);
            let garbage = c("$nope");
            assert_eq!(
                saltkey_verify_string(password.as_ptr(), garbage.as_ptr()),
                SALTKEY_ERR_INVALID_CREDENTIAL
            );
            saltkey_string_free(stored);
        }
    }
}
