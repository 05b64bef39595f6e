//! Basic Credential Parsing
//!
//! Decides what an `Authorization` header presents, without touching the
//! credential store.
//!
//! | Header | Result |
//! |---|---|
//! | absent | `Absent` |
//! | scheme other than `Basic` (case-insensitive) | `Absent` |
//! | `Basic` with an empty token | `Malformed(Missing)` |
//! | token that is not padded base64 | `Malformed(InvalidBase64)` |
//! | decoded bytes that are not UTF-8 | `Malformed(InvalidFormat)` |
//! | decoded text without `:` or starting with `:` | `Malformed(InvalidFormat)` |
//! | `user:pass` | `Present` |
//!
//! The password is everything after the first `:` and may itself contain `:`.

use std::fmt;

use crate::domain::value_object::user_password::RawPassword;

const BASIC_PREFIX: &str = "Basic ";

/// Why a Basic credential could not be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedCredential {
    Missing,
    InvalidBase64,
    InvalidFormat,
}

impl fmt::Display for MalformedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Missing => "credentials missing",
            Self::InvalidBase64 => "invalid base64",
            Self::InvalidFormat => "invalid credential format",
        };
        f.write_str(reason)
    }
}

/// Decoded `user:password` pair
pub struct BasicCredentials {
    pub user_name: String,
    pub password: RawPassword,
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("user_name", &self.user_name)
            .field("password", &self.password)
            .finish()
    }
}

/// What the request presented
#[derive(Debug)]
pub enum CredentialPresentation {
    Absent,
    Malformed(MalformedCredential),
    Present(BasicCredentials),
}

/// Parse the raw `Authorization` header value
pub fn parse_basic_authorization(header: Option<&str>) -> CredentialPresentation {
    let Some(header) = header else {
        return CredentialPresentation::Absent;
    };

    let Some(token) = strip_basic_scheme(header) else {
        return CredentialPresentation::Absent;
    };

    let token = token.trim();
    if token.is_empty() {
        return CredentialPresentation::Malformed(MalformedCredential::Missing);
    }

    let bytes = match platform::crypto::from_base64(token) {
        Ok(bytes) => bytes,
        Err(_) => return CredentialPresentation::Malformed(MalformedCredential::InvalidBase64),
    };

    // Invalid UTF-8 is malformed, never replaced.
    let Ok(decoded) = String::from_utf8(bytes) else {
        return CredentialPresentation::Malformed(MalformedCredential::InvalidFormat);
    };

    match decoded.find(':') {
        Some(index) if index > 0 => {
            let (user_name, rest) = decoded.split_at(index);
            CredentialPresentation::Present(BasicCredentials {
                user_name: user_name.to_owned(),
                password: RawPassword::new(&rest[1..]),
            })
        }
        _ => CredentialPresentation::Malformed(MalformedCredential::InvalidFormat),
    }
}

fn strip_basic_scheme(header: &str) -> Option<&str> {
    let prefix = header.get(..BASIC_PREFIX.len())?;
    if prefix.eq_ignore_ascii_case(BASIC_PREFIX) {
        Some(&header[BASIC_PREFIX.len()..])
    } else {
        None
    }
}
