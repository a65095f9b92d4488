//! SeaORM -> DomainError translation.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it here through `?`,
//! and higher layers map `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Map a unique-violation message to a domain conflict.
///
/// Postgres reports the index name; SQLite reports "table.col, table.col".
fn unique_violation_kind(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    if error_msg.contains("ux_players_tour_name")
        || error_msg.contains("players.tour_id, players.name")
    {
        return Some((
            ConflictKind::PlayerNameTaken,
            "A player with that name already exists in this tour",
        ));
    }
    if error_msg.contains("ux_round_scores_round_player")
        || error_msg.contains("round_scores.round_id, round_scores.player_id")
    {
        return Some((
            ConflictKind::DuplicateRoundScore,
            "Player already has a score in this round",
        ));
    }
    None
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Unique constraint violation");

        if let Some((kind, detail)) = unique_violation_kind(&error_msg) {
            return DomainError::conflict(kind, detail);
        }
        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::validation("Referenced record does not exist");
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
