//! User Password Value Object
//!
//! Domain wrappers over `platform::password`.
//!
//! - `RawPassword`: presented clear text, zeroized on drop
//! - `UserPassword`: stored Argon2id PHC hash

use platform::password::{ClearTextPassword, HashedPassword, PasswordHashError, Verification};
use std::fmt;

/// Raw password from a credential or registration request
///
/// Any string is accepted. Memory is zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(ClearTextPassword::new(raw))
    }

    pub(crate) fn as_clear_text(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawPassword([REDACTED])")
    }
}

/// Stored password hash
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password with a fresh salt
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> Result<Self, PasswordHashError> {
        raw.as_clear_text().hash(pepper).map(Self)
    }

    /// Wrap a value read from storage
    ///
    /// A malformed value is kept as-is and never verifies.
    pub fn from_db(phc: impl Into<String>) -> Self {
        Self(HashedPassword::from_stored(phc))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> Verification {
        self.0.verify(raw.as_clear_text(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UserPassword([HASH])")
    }
}
