use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Tour scorekeeper backend"))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
    time: String,
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let time = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let (db, db_error, migrations) = match require_db(&app_state) {
        Ok(conn) => {
            let ping = conn
                .execute(sea_orm::Statement::from_string(
                    conn.get_database_backend(),
                    "SELECT 1".to_string(),
                ))
                .await;
            match ping {
                Ok(_) => {
                    let version = match get_latest_migration_version(conn).await {
                        Ok(Some(version)) => version,
                        Ok(None) => "no_migrations".to_string(),
                        Err(_) => "unknown".to_string(),
                    };
                    ("ok", None, version)
                }
                Err(e) => (
                    "error",
                    Some(format!("DB query failed: {e}")),
                    "unknown".to_string(),
                ),
            }
        }
        Err(e) => ("error", Some(e.to_string()), "unknown".to_string()),
    };

    let response = HealthResponse {
        status: if db == "ok" { "ok" } else { "degraded" },
        app_version: env!("CARGO_PKG_VERSION"),
        db,
        db_error,
        migrations,
        time,
    };

    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root));
    cfg.route("/health", web::get().to(health));
}
