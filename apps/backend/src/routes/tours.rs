use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{TourId, ValidatedJson};
use crate::services::tours::{TourService, TourView};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTourRequest {
    pub name: String,
}

/// GET /api/tours
async fn list_tours(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let tours = TourService::new().list_tours(db).await?;
    let body: Vec<TourView> = tours.into_iter().map(TourView::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/tours
async fn create_tour(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateTourRequest>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let tour = TourService::new().create_tour(db, &body.name).await?;
    Ok(HttpResponse::Created().json(TourView::from(tour)))
}

/// GET /api/tours/{tour_id}
async fn get_tour(
    tour_id: TourId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let tour = TourService::new().get_tour(db, tour_id.0).await?;
    Ok(HttpResponse::Ok().json(TourView::from(tour)))
}

/// DELETE /api/tours/{tour_id}
///
/// Removes players, rounds and scores along with the tour.
async fn delete_tour(
    tour_id: TourId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = tour_id.0;
    let _guard = app_state.tour_locks.acquire(id).await;

    with_txn(&app_state, |txn| {
        Box::pin(async move { Ok(TourService::new().delete_tour(txn, id).await?) })
    })
    .await?;

    app_state.tour_locks.forget(id);
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_tours))
            .route(web::post().to(create_tour)),
    );
    cfg.service(
        web::resource("/{tour_id}")
            .route(web::get().to(get_tour))
            .route(web::delete().to(delete_tour)),
    );
}
