// SPDX-License-Identifier: Apache-2.0

//! Per-credential salt generation from the OS CSPRNG.

use std::fmt;

use rand::RngCore;
use rand::rngs::OsRng;

use crate::Result;

/// Length in bytes of a generated salt.
pub const SALT_LEN: usize = 32;

/// A per-credential random salt.
///
/// Generated fresh for every stored credential and never reused: the salt is
/// what makes two users with the same password store different digests, which
/// is what defeats precomputed lookup tables. It is stored alongside the
/// digest it was derived with (verification needs it back).
#[derive(Clone, PartialEq, Eq)]
pub struct Salt([u8; SALT_LEN]);

impl Salt {
    /// Generates a fresh salt from the operating system's secure random
    /// source.
    ///
    /// # Errors
    ///
    /// Returns [`PitfallError::EntropyUnavailable`] when the OS source
    /// fails. There is deliberately no fallback: substituting a
    /// non-cryptographic generator here is the anti-pattern this module
    /// teaches against.
    ///
    /// [`PitfallError::EntropyUnavailable`]: crate::PitfallError::EntropyUnavailable
    pub fn generate() -> Result<Self> {
        let mut bytes = [0u8; SALT_LEN];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Wraps externally supplied salt bytes (e.g. read back from a stored
    /// credential record).
    #[must_use]
    pub fn from_bytes(bytes: [u8; SALT_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrows the raw salt bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; SALT_LEN] {
        &self.0
    }
}

// Salts are not secrets the way plaintexts are, but they still have no
// business in log output.
impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Salt({SALT_LEN} bytes)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_salts_differ() {
        let a = Salt::generate().expect("generate salt");
        let b = Salt::generate().expect("generate salt");
        // 32 bytes of OS entropy; a collision here means the RNG is broken.
        assert_ne!(a, b);
    }

    #[test]
    fn test_salt_length() {
        let salt = Salt::generate().expect("generate salt");
        assert_eq!(salt.as_bytes().len(), SALT_LEN);
    }

    #[test]
    fn test_from_bytes_round_trip() {
        let bytes = [7u8; SALT_LEN];
        let salt = Salt::from_bytes(bytes);
        assert_eq!(salt.as_bytes(), &bytes);
    }

    #[test]
    fn test_debug_redacts_bytes() {
        let salt = Salt::from_bytes([0xAB; SALT_LEN]);
        let rendered = format!("{salt:?}");
        assert_eq!(rendered, "Salt(32 bytes)");
        assert!(!rendered.contains("ab"));
    }
}
