use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Which database the service talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbProfile {
    /// Production Postgres database (`PROD_DB`)
    Prod,
    /// Test Postgres database (`TEST_DB`, must end with `_test`)
    Test,
    /// Private in-memory SQLite database
    InMemory,
    /// SQLite file; `None` falls back to `SQLITE_FILE` or the default path
    SqliteFile { file: Option<String> },
}

/// Database owner enum for different access levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (full permissions for migrations)
    Owner,
}

/// Database engine selected through `DB_KIND`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    SqliteMemory,
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite_file" | "sqlite" => Ok(DbKind::SqliteFile),
            "sqlite-memory" | "sqlite_memory" | "memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!(
                "Unsupported DB_KIND '{other}' (expected postgres, sqlite-file or sqlite-memory)"
            ))),
        }
    }
}

impl DbProfile {
    pub fn is_sqlite(&self) -> bool {
        matches!(self, DbProfile::InMemory | DbProfile::SqliteFile { .. })
    }
}

pub const DEFAULT_SQLITE_FILE: &str = "zooriddle.sqlite";

/// Builds a database URL from environment variables based on profile and owner
pub fn db_url(profile: &DbProfile, owner: DbOwner) -> Result<String, AppError> {
    db_url_with(profile, owner, |name| env::var(name).ok())
}

/// Same as [`db_url`] with an explicit variable lookup.
pub fn db_url_with<F>(profile: &DbProfile, owner: DbOwner, lookup: F) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match profile {
        DbProfile::InMemory => Ok("sqlite::memory:".to_string()),
        DbProfile::SqliteFile { file } => {
            let path = file
                .clone()
                .or_else(|| lookup("SQLITE_FILE"))
                .unwrap_or_else(|| DEFAULT_SQLITE_FILE.to_string());
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbProfile::Prod | DbProfile::Test => {
            let host = lookup("POSTGRES_HOST").unwrap_or_else(|| "localhost".to_string());
            let port = lookup("POSTGRES_PORT").unwrap_or_else(|| "5432".to_string());
            let db_name = db_name(profile, &lookup)?;
            let (username, password) = credentials(owner, &lookup)?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
    }
}

fn db_name<F>(profile: &DbProfile, lookup: &F) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match profile {
        DbProfile::Test => {
            let name = must_var("TEST_DB", lookup)?;
            if !name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{name}'"
                )));
            }
            Ok(name)
        }
        _ => must_var("PROD_DB", lookup),
    }
}

fn credentials<F>(owner: DbOwner, lookup: &F) -> Result<(String, String), AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match owner {
        DbOwner::App => Ok((
            must_var("APP_DB_USER", lookup)?,
            must_var("APP_DB_PASSWORD", lookup)?,
        )),
        DbOwner::Owner => Ok((
            must_var("ZOORIDDLE_OWNER_USER", lookup)?,
            must_var("ZOORIDDLE_OWNER_PASSWORD", lookup)?,
        )),
    }
}

fn must_var<F>(name: &str, lookup: &F) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .ok_or_else(|| AppError::config(format!("Required environment variable '{name}' is not set")))
}
