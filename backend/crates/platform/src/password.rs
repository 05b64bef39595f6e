//! Password Hashing and Verification
//!
//! - Argon2id hashing (memory-hard, recommended by OWASP)
//! - Self-describing PHC strings: algorithm, version, parameters and salt
//!   travel with the hash, so verification needs nothing else
//! - Zeroization of clear text
//! - Constant-time digest comparison (inside `argon2`)
//!
//! Hashing and verification accept exactly the same encoding. A stored
//! value that does not parse as a PHC string never verifies.

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Error Types
// ============================================================================

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

// ============================================================================
// Verification Outcome
// ============================================================================

/// Result of checking a candidate password against a stored hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// Password matches and the hash uses current parameters
    Match,
    /// Password matches but the hash should be regenerated
    MatchNeedsRehash,
    /// Password does not match, or the stored hash is malformed
    Mismatch,
}

impl Verification {
    pub fn is_match(self) -> bool {
        !matches!(self, Verification::Mismatch)
    }
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// No policy is applied here: any string is accepted and its exact UTF-8
/// bytes are hashed.
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Password bytes with the optional pepper appended
    fn peppered(&self, pepper: Option<&[u8]>) -> Peppered {
        let mut combined = self.as_bytes().to_vec();
        if let Some(p) = pepper {
            combined.extend_from_slice(p);
        }
        Peppered(combined)
    }

    /// Hash the password using Argon2id with a fresh random salt
    ///
    /// ## Arguments
    /// * `pepper` - Optional application-wide secret for additional security
    ///
    /// ## Returns
    /// PHC-formatted hash string wrapped in `HashedPassword`
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let password_bytes = self.peppered(pepper);

        // Generate random salt (128 bits = 16 bytes)
        let salt = SaltString::generate(OsRng);

        let hash = current_hasher()
            .hash_password(&password_bytes.0, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

#[derive(Zeroize, ZeroizeOnDrop)]
struct Peppered(Vec<u8>);

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// `$argon2id$v=19$m=19456,t=2,p=1$<salt>$<hash>`
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a stored value without validating it
    ///
    /// Verification of a malformed value yields [`Verification::Mismatch`].
    pub fn from_stored(s: impl Into<String>) -> Self {
        Self { hash: s.into() }
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// ## Arguments
    /// * `password` - The clear text password to verify
    /// * `pepper` - Optional pepper (must match the one used during hashing)
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> Verification {
        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return Verification::Mismatch,
        };

        let password_bytes = password.peppered(pepper);

        // Parameters are read from the PHC string; the digest comparison
        // inside `verify_password` is constant-time.
        if Argon2::default()
            .verify_password(&password_bytes.0, &parsed_hash)
            .is_err()
        {
            return Verification::Mismatch;
        }

        if is_outdated(&parsed_hash) {
            Verification::MatchNeedsRehash
        } else {
            Verification::Match
        }
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

/// Verify `candidate` against a stored PHC string
pub fn verify_password(
    stored_hash: &str,
    candidate: &ClearTextPassword,
    pepper: Option<&[u8]>,
) -> Verification {
    HashedPassword::from_stored(stored_hash).verify(candidate, pepper)
}

// ============================================================================
// Helper Functions
// ============================================================================

/// OWASP recommended Argon2id parameters: m=19456 (19 MiB), t=2, p=1
fn current_hasher() -> Argon2<'static> {
    Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default())
}

fn is_outdated(parsed: &PasswordHash<'_>) -> bool {
    if parsed.algorithm != Algorithm::Argon2id.ident() {
        return true;
    }

    if parsed.version != Some(Version::V0x13 as u32) {
        return true;
    }

    let current = Params::default();
    match Params::try_from(parsed) {
        Ok(params) => {
            params.m_cost() != current.m_cost()
                || params.t_cost() != current.t_cost()
                || params.p_cost() != current.p_cost()
        }
        Err(_) => true,
    }
}

// ============================================================================
// Tests
// ============================================================================
