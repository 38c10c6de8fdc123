// SPDX-License-Identifier: Apache-2.0

//! Unsalted fast digest - the first step up from plaintext, and still wrong.

use sha2::{Digest, Sha256};

use crate::password::DIGEST_LEN;

/// Hashes a plaintext with a single unsalted SHA-256 pass.
///
/// Deterministic by construction: the same plaintext always yields the same
/// digest, for every user, on every server. That determinism is the weakness
/// this function exists to demonstrate - precomputed lookup tables invert
/// common passwords instantly, and two users with the same password are
/// visible as such in a leaked table. Use [`hash_with_salt`] or
/// [`hash_adaptive`] for anything real.
///
/// [`hash_with_salt`]: crate::password::hash_with_salt
/// [`hash_adaptive`]: crate::password::hash_adaptive
#[must_use]
pub fn hash_fast(plaintext: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(plaintext);
    hasher.finalize().into()
}
