//! Application configuration loaded from environment variables.

use std::env;

use crate::config::db::{DbKind, RuntimeEnv};
use crate::error::AppError;

const DEFAULT_MAX_JSON_PAYLOAD_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    // Server configuration
    pub host: String,
    pub port: u16,

    // Database configuration
    pub runtime_env: RuntimeEnv,
    pub db_kind: DbKind,

    // HTTP payload limits
    pub max_json_payload_size: usize,
}

impl Config {
    /// Load and validate all configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port_str = env::var("BACKEND_PORT").unwrap_or_else(|_| "3001".to_string());
        let port = port_str.parse::<u16>().map_err(|_| {
            AppError::config(format!(
                "BACKEND_PORT must be a valid port number, got '{port_str}'"
            ))
        })?;

        let runtime_env = match env::var("RUNTIME_ENV") {
            Ok(raw) if raw.eq_ignore_ascii_case("test") => RuntimeEnv::Test,
            Ok(raw) if raw.eq_ignore_ascii_case("prod") => RuntimeEnv::Prod,
            Ok(raw) => {
                return Err(AppError::config(format!(
                    "RUNTIME_ENV must be 'prod' or 'test', got '{raw}'"
                )))
            }
            Err(_) => RuntimeEnv::Prod,
        };

        let db_kind = DbKind::from_env()?;

        let max_json_payload_size = env::var("MAX_JSON_PAYLOAD_SIZE")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_JSON_PAYLOAD_SIZE);

        Ok(Config {
            host,
            port,
            runtime_env,
            db_kind,
            max_json_payload_size,
        })
    }
}
