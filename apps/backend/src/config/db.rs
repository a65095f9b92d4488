use std::env;

use crate::error::AppError;

/// Runtime environment, selects which database name is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeEnv {
    Prod,
    /// Test environment - enforces safety rules on the database name
    Test,
}

/// Database engine the pool talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    /// Private in-memory SQLite database, one per connection pool
    SqliteMemory,
}

impl DbKind {
    /// Read `DB_KIND` (postgres, sqlite-file, sqlite-memory). Defaults to postgres.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("DB_KIND") {
            Ok(raw) => Self::parse(&raw),
            Err(_) => Ok(DbKind::Postgres),
        }
    }

    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite_file" => Ok(DbKind::SqliteFile),
            "sqlite-memory" | "sqlite_memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!(
                "Unsupported DB_KIND '{other}' (expected postgres, sqlite-file or sqlite-memory)"
            ))),
        }
    }
}

/// Builds the connection URL for the given environment and engine.
///
/// `DATABASE_URL` overrides Postgres and SQLite file settings. The in-memory
/// engine ignores the environment entirely.
pub fn db_url(runtime_env: RuntimeEnv, db_kind: DbKind) -> Result<String, AppError> {
    match db_kind {
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
        DbKind::SqliteFile => {
            if let Ok(url) = env::var("DATABASE_URL") {
                return Ok(url);
            }
            let path = env::var("SQLITE_PATH").unwrap_or_else(|_| "tour.sqlite".to_string());
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbKind::Postgres => {
            if let Ok(url) = env::var("DATABASE_URL") {
                return Ok(url);
            }
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = db_name(runtime_env)?;
            let username = must_var("APP_DB_USER")?;
            let password = must_var("APP_DB_PASSWORD")?;

            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
    }
}

/// Get database name based on runtime environment
fn db_name(runtime_env: RuntimeEnv) -> Result<String, AppError> {
    match runtime_env {
        RuntimeEnv::Prod => must_var("PROD_DB"),
        RuntimeEnv::Test => {
            let db_name = must_var("TEST_DB")?;
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test environment requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
