//! Server Configuration
//!
//! Read once at startup from the environment (a `.env` file is honored).

use std::net::SocketAddr;

use anyhow::{Context, bail};
use auth::AuthConfig;
use axum::http::HeaderValue;
use platform::crypto::from_base64;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

/// Administrator created on first start
#[derive(Clone)]
pub struct AdminCredentials {
    pub user_name: String,
    pub password: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("user_name", &self.user_name)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Process-wide configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub frontend_origins: Vec<HeaderValue>,
    /// `None` skips the administrator bootstrap
    pub admin: Option<AdminCredentials>,
    pub seed_sample_data: bool,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let max_connections = match var("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .filter_map(|origin| origin.trim().parse().ok())
            .collect();

        let admin = match (var("ADMIN_USERNAME"), var("ADMIN_PASSWORD")) {
            (Some(user_name), Some(password)) => Some(AdminCredentials {
                user_name,
                password,
            }),
            (None, None) if cfg!(debug_assertions) => Some(AdminCredentials {
                user_name: "admin".to_string(),
                password: "admin123".to_string(),
            }),
            (None, None) => None,
            _ => bail!("ADMIN_USERNAME and ADMIN_PASSWORD must be set together"),
        };

        let seed_sample_data = match var("SEED_SAMPLE_DATA") {
            Some(raw) => parse_flag(&raw).context("SEED_SAMPLE_DATA must be true or false")?,
            None => cfg!(debug_assertions),
        };

        let password_pepper = var("AUTH_PASSWORD_PEPPER")
            .map(|b64| from_base64(b64.trim()))
            .transpose()
            .context("AUTH_PASSWORD_PEPPER must be standard base64")?;

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
            frontend_origins,
            admin,
            seed_sample_data,
            auth: AuthConfig {
                realm: var("AUTH_REALM"),
                password_pepper,
            },
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
