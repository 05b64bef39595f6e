//! Domain Value Objects
//!
//! Identifiers and validated text fields of the entity graph. Text is
//! trimmed before validation; lengths are counted in characters and match
//! the column sizes of the schema.

use std::fmt;

use kernel::id::Id;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// Identifiers
// ============================================================================

pub struct DepartmentMarker;
pub type DepartmentId = Id<DepartmentMarker>;

pub struct EmployeeMarker;
pub type EmployeeId = Id<EmployeeMarker>;

pub struct AssetMarker;
pub type AssetId = Id<AssetMarker>;

// ============================================================================
// Validation
// ============================================================================

/// A field value that violates its invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("Email is not a valid address")]
    InvalidEmail,
}

fn required_text(raw: &str, field: &'static str, max: usize) -> Result<String, FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FieldError::Required { field });
    }
    if value.chars().count() > max {
        return Err(FieldError::TooLong { field, max });
    }
    Ok(value.to_owned())
}

macro_rules! text_value_object {
    ($(#[$meta:meta])* $name:ident, $field:literal, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub const MAX_LENGTH: usize = $max;

            pub fn new(raw: impl AsRef<str>) -> Result<Self, FieldError> {
                required_text(raw.as_ref(), $field, Self::MAX_LENGTH).map(Self)
            }

            /// Wrap a value read from storage (already validated on write)
            pub fn from_db(value: String) -> Self {
                Self(value)
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_value_object!(
    /// Department name, unique across departments
    DeptName,
    "Department name",
    200
);

text_value_object!(
    /// Free-form department location
    Location,
    "Location",
    200
);

text_value_object!(FullName, "Full name", 200);

text_value_object!(
    /// Asset name
    AssetName,
    "Asset name",
    200
);

text_value_object!(
    /// Serial number, unique across assets
    SerialNumber,
    "Serial number",
    100
);

text_value_object!(AssetType, "Asset type", 100);

impl Location {
    /// Parse an optional location; blank input means "no location"
    pub fn optional(raw: Option<&str>) -> Result<Option<Self>, FieldError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => Self::new(value).map(Some),
        }
    }
}

// ============================================================================
// Email
// ============================================================================

/// Employee email, unique across employees
///
/// Stored trimmed and lowercased, so uniqueness is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub const MAX_LENGTH: usize = 320;

    pub fn new(raw: impl AsRef<str>) -> Result<Self, FieldError> {
        // Lowercasing can lengthen the text, so the limit applies afterwards.
        let value = required_text(&raw.as_ref().to_lowercase(), "Email", Self::MAX_LENGTH)?;
        if !Self::is_well_formed(&value) {
            return Err(FieldError::InvalidEmail);
        }
        Ok(Self(value))
    }

    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_well_formed(value: &str) -> bool {
        if value.chars().any(char::is_whitespace) {
            return false;
        }
        let Some((local, domain)) = value.split_once('@') else {
            return false;
        };
        !local.is_empty()
            && !domain.contains('@')
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_trimmed() {
        assert_eq!(DeptName::new("  Ops ").unwrap().as_str(), "Ops");
    }

    #[test]
    fn test_blank_is_required() {
        assert_eq!(
            DeptName::new("   "),
            Err(FieldError::Required {
                field: "Department name"
            })
        );
        assert_eq!(
            SerialNumber::new("").unwrap_err().to_string(),
            "Serial number is required"
        );
    }

    #[test]
    fn test_length_limits() {
        assert!(SerialNumber::new("S".repeat(100)).is_ok());
        assert_eq!(
            SerialNumber::new("S".repeat(101)),
            Err(FieldError::TooLong {
                field: "Serial number",
                max: 100
            })
        );
        // Characters, not bytes
        assert!(FullName::new("ş".repeat(200)).is_ok());
    }

    #[test]
    fn test_optional_location() {
        assert_eq!(Location::optional(None), Ok(None));
        assert_eq!(Location::optional(Some("  ")), Ok(None));
        assert_eq!(
            Location::optional(Some("Bursa")).unwrap().unwrap().as_str(),
            "Bursa"
        );
    }

    #[test]
    fn test_email_normalized() {
        let email = Email::new("  Jane@X.com ").unwrap();
        assert_eq!(email.as_str(), "jane@x.com");
    }

    #[test]
    fn test_email_length_counts_lowercased_text() {
        // 'İ' lowercases to two characters
        let domain = "@x.com";
        let local = "İ".repeat(Email::MAX_LENGTH - domain.len());
        assert_eq!(
            Email::new(format!("{local}{domain}")),
            Err(FieldError::TooLong {
                field: "Email",
                max: Email::MAX_LENGTH
            })
        );

        let local = "a".repeat(Email::MAX_LENGTH - domain.len());
        assert!(Email::new(format!("{local}{domain}")).is_ok());
    }

    #[test]
    fn test_email_format() {
        for bad in ["jane", "@x.com", "jane@", "jane@x", "jane@@x.com", "ja ne@x.com", "jane@.com"] {
            assert_eq!(Email::new(bad), Err(FieldError::InvalidEmail), "{bad}");
        }
        assert!(Email::new("ahmet.yilmaz@orn.com").is_ok());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&DeptName::new("Ops").unwrap()).unwrap();
        assert_eq!(json, "\"Ops\"");
    }
}
