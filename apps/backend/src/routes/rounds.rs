use std::collections::HashMap;

use actix_web::{web, HttpResponse};

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::ScoreSheet;
use crate::error::AppError;
use crate::extractors::{RoundId, TourId, ValidatedJson};
use crate::repos::players;
use crate::services::rounds::RoundService;
use crate::state::app_state::AppState;

/// GET /api/tours/{tour_id}/rounds
///
/// Full history, newest round first, rows in placement order.
async fn list_rounds(
    tour_id: TourId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let history = RoundService::new().round_history(db, tour_id.0).await?;
    Ok(HttpResponse::Ok().json(history))
}

/// POST /api/tours/{tour_id}/rounds
///
/// Body: `{"entries": {"<player_id>": {"raw_score", "c2", "ctp", "ace"}}}`.
async fn submit_round(
    tour_id: TourId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ScoreSheet>,
) -> Result<HttpResponse, AppError> {
    let id = tour_id.0;
    let sheet = body.into_inner();
    let _guard = app_state.tour_locks.acquire(id).await;

    let view = with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(RoundService::new().submit_round(txn, id, &sheet).await?) })
    })
    .await?;

    Ok(HttpResponse::Created().json(view))
}

/// POST /api/tours/{tour_id}/rounds/form
///
/// Urlencoded sheet keyed by player name: `{name}`, `c2_{name}`,
/// `ctp_{name}`, `ace_{name}`.
async fn submit_round_form(
    tour_id: TourId,
    app_state: web::Data<AppState>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let id = tour_id.0;
    let form = form.into_inner();
    let _guard = app_state.tour_locks.acquire(id).await;

    let view = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            let roster = players::find_all_by_tour(txn, id)
                .await
                .map_err(AppError::from)?;
            let sheet = ScoreSheet::from_named_form(
                roster.iter().map(|p| (p.id, p.name.as_str())),
                &form,
            );
            Ok(RoundService::new().submit_round(txn, id, &sheet).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(view))
}

/// GET /api/tours/{tour_id}/rounds/{round_id}
async fn get_round(
    tour_id: TourId,
    round_id: RoundId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let view = RoundService::new()
        .get_round(db, tour_id.0, round_id.0)
        .await?;
    Ok(HttpResponse::Ok().json(view))
}

/// PUT /api/tours/{tour_id}/rounds/{round_id}
///
/// Recomputes the round's rows; player totals stay as they are.
async fn edit_round(
    tour_id: TourId,
    round_id: RoundId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ScoreSheet>,
) -> Result<HttpResponse, AppError> {
    let (tid, rid) = (tour_id.0, round_id.0);
    let sheet = body.into_inner();
    let _guard = app_state.tour_locks.acquire(tid).await;

    let view = with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(RoundService::new().edit_round(txn, tid, rid, &sheet).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(view))
}

/// DELETE /api/tours/{tour_id}/rounds/{round_id}
async fn delete_round(
    tour_id: TourId,
    round_id: RoundId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (tid, rid) = (tour_id.0, round_id.0);
    let _guard = app_state.tour_locks.acquire(tid).await;

    with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(RoundService::new().delete_round(txn, tid, rid).await?) })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{tour_id}/rounds")
            .route(web::get().to(list_rounds))
            .route(web::post().to(submit_round)),
    );
    cfg.service(web::resource("/{tour_id}/rounds/form").route(web::post().to(submit_round_form)));
    cfg.service(
        web::resource("/{tour_id}/rounds/{round_id}")
            .route(web::get().to(get_round))
            .route(web::put().to(edit_round))
            .route(web::delete().to(delete_round)),
    );
}
