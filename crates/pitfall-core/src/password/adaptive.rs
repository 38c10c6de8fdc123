// SPDX-License-Identifier: Apache-2.0

//! Adaptive salted hash via Argon2id.
//!
//! The output is a self-describing PHC string (algorithm tag, version, cost
//! parameters, salt, digest), so nothing needs separate storage and the cost
//! can be raised later without breaking existing records.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use crate::Result;
use crate::error::PitfallError;

/// Hashes a plaintext with Argon2id and the library's default (memory-hard)
/// parameters.
///
/// A fresh salt is generated internally from the OS CSPRNG; callers never
/// supply one. The returned PHC string looks like
/// `$argon2id$v=19$m=19456,t=2,p=1$<salt>$<digest>`.
///
/// # Errors
///
/// Returns [`PitfallError::Encoding`] when the underlying library fails.
/// Failure is surfaced, never silently downgraded to a weaker strategy -
/// that downgrade is the exact anti-pattern this lesson teaches against.
///
/// [`PitfallError::Encoding`]: crate::PitfallError::Encoding
pub fn hash_adaptive(plaintext: &[u8]) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let encoded = Argon2::default().hash_password(plaintext, &salt)?.to_string();
    Ok(encoded)
}

/// Checks a candidate plaintext against a previously produced PHC string.
///
/// Re-derives with the salt and cost embedded in `encoded` and compares via
/// the argon2 crate's constant-time routine. Returns `Ok(false)` on a
/// mismatch; a malformed `encoded` string is an error, not a mismatch.
///
/// # Errors
///
/// Returns [`PitfallError::Encoding`] when `encoded` is not a valid PHC
/// string or names parameters the library cannot process.
///
/// [`PitfallError::Encoding`]: crate::PitfallError::Encoding
pub fn verify_adaptive(plaintext: &[u8], encoded: &str) -> Result<bool> {
    let parsed = PasswordHash::new(encoded)?;
    // The parser accepts structurally incomplete strings (e.g. a salt field
    // but no digest). Those must surface as encoding errors, not as "wrong
    // password".
    if parsed.salt.is_none() || parsed.hash.is_none() {
        return Err(PitfallError::Encoding {
            message: "encoded hash is missing its salt or digest field".to_string(),
        });
    }
    match Argon2::default().verify_password(plaintext, &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(err) => Err(err.into()),
    }
}
