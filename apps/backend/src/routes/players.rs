use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::{TourId, ValidatedJson};
use crate::services::players::{PlayerService, PlayerView};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddPlayerRequest {
    pub name: String,
    #[serde(default)]
    pub handicap: Option<i32>,
}

/// GET /api/tours/{tour_id}/players
///
/// Roster with running totals, ordered by player id.
async fn list_players(
    tour_id: TourId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let roster = PlayerService::new().roster(db, tour_id.0).await?;
    let body: Vec<PlayerView> = roster.into_iter().map(PlayerView::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/tours/{tour_id}/players
async fn add_player(
    tour_id: TourId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<AddPlayerRequest>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let player = PlayerService::new()
        .add_player(db, tour_id.0, &body.name, body.handicap)
        .await?;
    Ok(HttpResponse::Created().json(PlayerView::from(player)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{tour_id}/players")
            .route(web::get().to(list_players))
            .route(web::post().to(add_player)),
    );
}
