//! Application Configuration
//!
//! Configuration for the Auth application layer.

/// Auth application configuration
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// Realm advertised in the `WWW-Authenticate` challenge
    pub realm: Option<String>,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Value of the `WWW-Authenticate` header
    pub fn challenge(&self) -> String {
        match &self.realm {
            Some(realm) => format!("Basic realm=\"{}\"", realm.replace('"', "'")),
            None => "Basic".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_without_realm() {
        assert_eq!(AuthConfig::default().challenge(), "Basic");
    }

    #[test]
    fn test_challenge_with_realm() {
        let config = AuthConfig {
            realm: Some("inventory".into()),
            ..Default::default()
        };
        assert_eq!(config.challenge(), "Basic realm=\"inventory\"");
    }
}
