//! Database connection management and startup migrations.

use std::future::Future;
use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, DbKind, RuntimeEnv};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_RETRY_INTERVAL_MS: u64 = 500;

/// Get database engine name for logging
fn get_db_engine(db_kind: DbKind) -> &'static str {
    match db_kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

/// Retry a connection attempt with fixed interval delays.
/// Returns the error of the last attempt once all retries are exhausted.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(_) => {
                warn!(
                    attempt,
                    max_attempts, interval_ms, "connection_retry=failed"
                );
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

fn connect_options(url: String, db_kind: DbKind) -> ConnectOptions {
    let mut opts = ConnectOptions::new(url);
    opts.sqlx_logging(false);

    match db_kind {
        DbKind::Postgres => {
            opts.max_connections(10)
                .min_connections(1)
                .connect_timeout(Duration::from_secs(5))
                .acquire_timeout(Duration::from_secs(5));
        }
        DbKind::SqliteFile => {
            opts.max_connections(4).min_connections(1);
        }
        DbKind::SqliteMemory => {
            // Every connection would get its own private database.
            opts.max_connections(1).min_connections(1);
        }
    }

    opts
}

/// Open a connection pool without touching the schema.
pub async fn connect_db(
    runtime_env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, AppError> {
    let url = db_url(runtime_env, db_kind)?;
    let attempts = match db_kind {
        DbKind::SqliteMemory => 1,
        _ => CONNECT_ATTEMPTS,
    };

    let conn = retry_connection(
        || {
            let opts = connect_options(url.clone(), db_kind);
            async move {
                Database::connect(opts).await.map_err(|e| {
                    warn!(error = %e, "database connect failed");
                    AppError::db_unavailable()
                })
            }
        },
        attempts,
        CONNECT_RETRY_INTERVAL_MS,
    )
    .await?;

    info!(
        db_engine = get_db_engine(db_kind),
        env = ?runtime_env,
        "database connected"
    );
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(
    runtime_env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(runtime_env, db_kind).await?;

    Migrator::up(&conn, None)
        .await
        .map_err(|e| AppError::config(format!("migration failed: {e}")))?;

    info!(db_engine = get_db_engine(db_kind), "migrations applied");
    Ok(conn)
}
