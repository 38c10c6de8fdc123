// SPDX-License-Identifier: Apache-2.0

//! Salted iterated digest via PBKDF2-HMAC-SHA256.
//!
//! The iteration count is the knob that turns a microsecond hash into a
//! deliberate per-guess cost. Verification re-derives the digest and compares
//! in constant time.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::Result;
use crate::error::PitfallError;
use crate::password::DIGEST_LEN;

/// Iteration count used by the demonstration driver. High enough that a
/// single guess costs measurable CPU time.
pub const DEFAULT_ITERATIONS: u32 = 100_000;

/// Derives a digest from (plaintext, salt, iteration count) with
/// PBKDF2-HMAC-SHA256.
///
/// Deterministic given identical inputs; changing any single byte of the
/// salt yields an unrelated digest. The salt must be stored alongside the
/// digest, since verification needs to re-derive with it.
///
/// # Errors
///
/// Returns [`PitfallError::InvalidInput`] when `salt` is empty or
/// `iterations` is zero.
pub fn hash_with_salt(plaintext: &[u8], salt: &[u8], iterations: u32) -> Result<[u8; DIGEST_LEN]> {
    if salt.is_empty() {
        return Err(PitfallError::invalid_input("salt must not be empty"));
    }
    if iterations == 0 {
        return Err(PitfallError::invalid_input(
            "iteration count must be at least 1",
        ));
    }

    let mut digest = [0u8; DIGEST_LEN];
    pbkdf2_hmac::<Sha256>(plaintext, salt, iterations, &mut digest);
    Ok(digest)
}

/// Re-derives the digest for `plaintext` and compares it against `expected`
/// in constant time.
///
/// The comparison never exits early on the first mismatching byte; only the
/// (public) lengths short-circuit.
///
/// # Errors
///
/// Returns [`PitfallError::InvalidInput`] under the same conditions as
/// [`hash_with_salt`].
pub fn verify_with_salt(
    plaintext: &[u8],
    salt: &[u8],
    iterations: u32,
    expected: &[u8],
) -> Result<bool> {
    let derived = hash_with_salt(plaintext, salt, iterations)?;
    Ok(derived.as_slice().ct_eq(expected).into())
}
