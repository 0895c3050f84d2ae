//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use crate::config::db::{DbKind, DbProfile};
use crate::error::AppError;
use crate::middleware::cors::parse_allowed_origins;
use crate::state::session_config::SessionConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_profile: DbProfile,
    /// When set, round state lives in Redis instead of process memory.
    pub redis_url: Option<String>,
    pub session: SessionConfig,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port_str = lookup("BACKEND_PORT").unwrap_or_else(|| "3001".to_string());
        let port = port_str.parse::<u16>().map_err(|_| {
            AppError::config(format!(
                "BACKEND_PORT must be a valid port number, got '{port_str}'"
            ))
        })?;

        let db_kind = match lookup("DB_KIND") {
            Some(raw) => raw.parse::<DbKind>()?,
            None => DbKind::Postgres,
        };
        let db_profile = match db_kind {
            DbKind::Postgres => DbProfile::Prod,
            DbKind::SqliteFile => DbProfile::SqliteFile {
                file: lookup("SQLITE_FILE"),
            },
            DbKind::SqliteMemory => DbProfile::InMemory,
        };

        let redis_url = lookup("REDIS_URL").filter(|url| !url.trim().is_empty());

        let mut session = SessionConfig::default();
        if let Some(name) = lookup("SESSION_COOKIE_NAME").filter(|n| !n.trim().is_empty()) {
            session.cookie_name = name;
        }
        if let Some(raw) = lookup("SESSION_COOKIE_SECURE") {
            session.cookie_secure = parse_bool("SESSION_COOKIE_SECURE", &raw)?;
        }
        if let Some(raw) = lookup("SESSION_TTL_SECS") {
            let secs = raw.parse::<u64>().ok().filter(|s| *s > 0).ok_or_else(|| {
                AppError::config(format!(
                    "SESSION_TTL_SECS must be a positive integer, got '{raw}'"
                ))
            })?;
            session.ttl = Duration::from_secs(secs);
        }

        let cors_allowed_origins =
            parse_allowed_origins(lookup("CORS_ALLOWED_ORIGINS").as_deref());

        Ok(Self {
            host,
            port,
            db_profile,
            redis_url,
            session,
            cors_allowed_origins,
        })
    }
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(AppError::config(format!(
            "{name} must be a boolean, got '{raw}'"
        ))),
    }
}
