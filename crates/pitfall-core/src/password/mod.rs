// SPDX-License-Identifier: Apache-2.0

//! Password storage strategies, weakest to strongest.
//!
//! Four ways to turn a plaintext credential into something a server could
//! store, in the order a teaching walkthrough presents them:
//!
//! 1. the plaintext itself ([`Strategy::Plaintext`] - never implemented,
//!    only described),
//! 2. an unsalted fast digest ([`hash_fast`]),
//! 3. a salted iterated digest ([`hash_with_salt`]),
//! 4. an adaptive salted hash ([`hash_adaptive`]).
//!
//! Every operation is stateless and synchronous; callers own all inputs and
//! outputs, so concurrent use needs no coordination.

pub mod adaptive;
pub mod fast;
pub mod kdf;
pub mod salt;

pub use adaptive::{hash_adaptive, verify_adaptive};
pub use fast::hash_fast;
pub use kdf::{DEFAULT_ITERATIONS, hash_with_salt, verify_with_salt};
pub use salt::{SALT_LEN, Salt};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Length in bytes of the digests produced by [`hash_fast`] and
/// [`hash_with_salt`].
pub const DIGEST_LEN: usize = 32;

/// A password storage strategy, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Store the plaintext itself. The explicit negative example: no
    /// operation in this crate produces it.
    Plaintext,
    /// Unsalted SHA-256 digest. Deterministic across users, so precomputed
    /// lookup tables break it wholesale.
    FastDigest,
    /// PBKDF2-HMAC-SHA256 over (plaintext, per-credential salt, iteration
    /// count). The salt must be stored alongside the digest.
    SaltedKdf,
    /// Argon2id with an internally generated salt, encoded as a
    /// self-describing PHC string.
    Adaptive,
}

impl Strategy {
    /// All strategies in presentation order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Plaintext,
        Strategy::FastDigest,
        Strategy::SaltedKdf,
        Strategy::Adaptive,
    ];

    /// Short display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Plaintext => "plain text",
            Strategy::FastDigest => "fast digest",
            Strategy::SaltedKdf => "salted KDF",
            Strategy::Adaptive => "adaptive hash",
        }
    }

    /// One-line description of what gets stored.
    #[must_use]
    pub fn summary(self) -> &'static str {
        match self {
            Strategy::Plaintext => "the credential itself, readable by anyone with the table",
            Strategy::FastDigest => "SHA-256 of the plaintext, no salt",
            Strategy::SaltedKdf => "PBKDF2-HMAC-SHA256 digest plus the salt it was derived with",
            Strategy::Adaptive => "Argon2id PHC string embedding algorithm, cost, salt and digest",
        }
    }

    /// The weakness being taught, or `None` for the recommended strategy.
    #[must_use]
    pub fn weakness(self) -> Option<&'static str> {
        match self {
            Strategy::Plaintext => Some("a database leak leaks every credential directly"),
            Strategy::FastDigest => {
                Some("identical passwords share a digest; rainbow tables invert common ones")
            }
            Strategy::SaltedKdf => {
                Some("CPU-only cost; GPUs and ASICs parallelize guessing cheaply")
            }
            Strategy::Adaptive => None,
        }
    }

    /// Whether the strategy is acceptable for real credential storage.
    #[must_use]
    pub fn is_acceptable(self) -> bool {
        matches!(self, Strategy::SaltedKdf | Strategy::Adaptive)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
