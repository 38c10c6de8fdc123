// SPDX-License-Identifier: Apache-2.0

//! Error types for the Pitfall crates.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! The CLI uses `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur in the password hasher and lesson helpers.
#[derive(Error, Debug)]
pub enum PitfallError {
    /// A required parameter was missing or malformed (empty salt,
    /// zero iteration count, placeholder/parameter arity mismatch).
    #[error("invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input.
        message: String,
    },

    /// An encoded hash string could not be produced or parsed.
    #[error("hash encoding error: {message}")]
    Encoding {
        /// Error message from the underlying hashing library.
        message: String,
    },

    /// The operating system's secure random source failed.
    ///
    /// Fatal for salt generation: a non-cryptographic source is never
    /// substituted.
    #[error("entropy source unavailable: {message}")]
    EntropyUnavailable {
        /// Error message from the random number generator.
        message: String,
    },
}

impl PitfallError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        PitfallError::InvalidInput {
            message: message.into(),
        }
    }
}

impl From<argon2::password_hash::Error> for PitfallError {
    fn from(err: argon2::password_hash::Error) -> Self {
        PitfallError::Encoding {
            message: err.to_string(),
        }
    }
}

impl From<rand::Error> for PitfallError {
    fn from(err: rand::Error) -> Self {
        PitfallError::EntropyUnavailable {
            message: err.to_string(),
        }
    }
}
