use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbOwner, DbProfile};
use crate::error::AppError;
use crate::logging::pii::Redacted;

fn connect_options(profile: &DbProfile, url: String) -> ConnectOptions {
    let mut opts = ConnectOptions::new(url);
    opts.acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    match profile {
        // Every pooled connection would otherwise open its own empty database.
        DbProfile::InMemory => {
            opts.max_connections(1).min_connections(1);
        }
        DbProfile::SqliteFile { .. } => {
            opts.max_connections(4);
        }
        DbProfile::Prod | DbProfile::Test => {
            opts.max_connections(16);
        }
    }
    opts
}

/// Open a connection pool for the profile. Does NOT run migrations.
pub async fn connect_db(profile: &DbProfile, owner: DbOwner) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile, owner)?;
    let conn = Database::connect(connect_options(profile, url))
        .await
        .map_err(|e| {
            tracing::error!(
                profile = ?profile,
                error = %Redacted(&e.to_string()),
                "db.connect_failed"
            );
            AppError::from(e)
        })?;

    info!(profile = ?profile, owner = ?owner, "db.connected");
    Ok(conn)
}

/// Connect and bring the schema up to the latest migration.
pub async fn bootstrap_db(profile: DbProfile, owner: DbOwner) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(&profile, owner).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}
