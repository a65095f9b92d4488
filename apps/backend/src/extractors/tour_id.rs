use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::db::require_db;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::tours;
use crate::state::app_state::AppState;

/// Parse a positive id out of a path segment.
pub(crate) fn parse_path_id(
    req: &HttpRequest,
    name: &str,
    code: ErrorCode,
) -> Result<i64, AppError> {
    let raw = req
        .match_info()
        .get(name)
        .ok_or_else(|| AppError::bad_request(code, format!("Missing {name} parameter")))?;

    let id = raw
        .parse::<i64>()
        .map_err(|_| AppError::bad_request(code, format!("Invalid {name}: {raw}")))?;

    if id <= 0 {
        return Err(AppError::bad_request(
            code,
            format!("{name} must be positive, got: {id}"),
        ));
    }
    Ok(id)
}

/// Tour ID extracted from the route path parameter
/// Validates that the tour exists in the database
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TourId(pub i64);

impl FromRequest for TourId {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let tour_id = parse_path_id(&req, "tour_id", ErrorCode::InvalidTourId)?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available"))?;
            let db = require_db(app_state)?;

            tours::require_tour(db, tour_id).await?;

            Ok(TourId(tour_id))
        })
    }
}
