// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Pitfall Core
//!
//! Library behind the `pitfall` teaching CLI: vulnerable and hardened code
//! for three classic web-application pitfalls, side by side.
//!
//! The reusable, tested piece is the password hasher in [`password`]: four
//! storage strategies of increasing strength (plaintext, unsalted digest,
//! salted iterated digest, adaptive salted hash) plus verification. The
//! [`lessons`] modules carry the SQL injection and cross-site scripting
//! material; their unsafe variants exist only as non-executing illustrations
//! in the docs.
//!
//! ## Quick Start
//!
//! ```rust
//! use pitfall_core::password::{hash_adaptive, verify_adaptive};
//!
//! # fn example() -> pitfall_core::Result<()> {
//! let encoded = hash_adaptive(b"correct horse battery staple")?;
//! assert!(verify_adaptive(b"correct horse battery staple", &encoded)?);
//! assert!(!verify_adaptive(b"tr0ub4dor&3", &encoded)?);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`password`] - the four password storage strategies and verification
//! - [`lessons`] - SQL injection and XSS contrast material
//! - [`error`] - error types

// ============================================================================
// Error Handling
// ============================================================================

pub use error::PitfallError;

/// Convenience Result type for Pitfall operations.
///
/// This is equivalent to `std::result::Result<T, PitfallError>`.
pub type Result<T> = std::result::Result<T, PitfallError>;

// ============================================================================
// Password Hashing
// ============================================================================

pub use password::{
    DEFAULT_ITERATIONS, DIGEST_LEN, SALT_LEN, Salt, Strategy, hash_adaptive, hash_fast,
    hash_with_salt, verify_adaptive, verify_with_salt,
};

// ============================================================================
// Lessons
// ============================================================================

pub use lessons::injection::{ParameterizedQuery, login_query};
pub use lessons::xss::{escape_html, render_comment};

// ============================================================================
// Modules
// ============================================================================

pub mod error;
pub mod lessons;
pub mod password;
