//! User Name Value Object
//!
//! ユーザー名は、資格情報の照合に使われる**ログイン識別子**。
//!
//! ## 設計方針
//! - 照合は完全一致（大文字・小文字を区別）
//! - 入力はそのまま保持する（トリムや正規化はしない）
//! - Basic 認証で表現できない文字（`:`）と制御文字は登録時に拒否
//!
//! ## 不変条件
//! - 空でない
//! - 長さ: 1〜100文字
//! - `:` と制御文字を含まない

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 100;

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// User name is empty
    Empty,

    /// User name is too long (maximum: USER_NAME_MAX_LENGTH)
    TooLong { length: usize, max: usize },

    /// User name contains the Basic credential separator
    ContainsSeparator,

    /// User name contains a control character
    ControlCharacter { position: usize },
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "User name cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "User name is too long ({length} chars, maximum {max})")
            }
            Self::ContainsSeparator => write!(f, "User name cannot contain ':'"),
            Self::ControlCharacter { position } => {
                write!(f, "User name contains a control character at position {position}")
            }
        }
    }
}

impl std::error::Error for UserNameError {}

/// Validated user name
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    pub fn new(input: impl Into<String>) -> Result<Self, UserNameError> {
        let value = input.into();
        Self::validate(&value)?;
        Ok(Self(value))
    }

    /// Create from database values (assumes already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    fn validate(value: &str) -> Result<(), UserNameError> {
        if value.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = value.chars().count();
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        if value.contains(':') {
            return Err(UserNameError::ContainsSeparator);
        }

        if let Some(position) = value.chars().position(char::is_control) {
            return Err(UserNameError::ControlCharacter { position });
        }

        Ok(())
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserName").field(&self.0).finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_names() {
        assert!(UserName::new("admin").is_ok());
        assert!(UserName::new("Jane.Doe").is_ok());
        assert!(UserName::new("ops team").is_ok());
        assert!(UserName::new("ü").is_ok());
    }

    #[test]
    fn test_case_is_preserved() {
        let name = UserName::new("Alice").unwrap();
        assert_eq!(name.as_str(), "Alice");
        assert_ne!(name, UserName::new("alice").unwrap());
    }

    #[test]
    fn test_empty() {
        assert_eq!(UserName::new(""), Err(UserNameError::Empty));
    }

    #[test]
    fn test_too_long() {
        let long = "a".repeat(USER_NAME_MAX_LENGTH + 1);
        assert!(matches!(
            UserName::new(long),
            Err(UserNameError::TooLong { length: 101, max: 100 })
        ));
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_separator_rejected() {
        assert_eq!(
            UserName::new("alice:bob"),
            Err(UserNameError::ContainsSeparator)
        );
    }

    #[test]
    fn test_control_character_rejected() {
        assert_eq!(
            UserName::new("ali\u{0}ce"),
            Err(UserNameError::ControlCharacter { position: 3 })
        );
    }

    #[test]
    fn test_serde_validates() {
        let ok: Result<UserName, _> = serde_json::from_str("\"admin\"");
        assert!(ok.is_ok());
        let err: Result<UserName, _> = serde_json::from_str("\"a:b\"");
        assert!(err.is_err());
    }
}
