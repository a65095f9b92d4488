use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use super::tour_id::parse_path_id;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Round ID from the path. Ownership by the tour is checked by the service.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RoundId(pub i64);

impl FromRequest for RoundId {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(parse_path_id(req, "round_id", ErrorCode::InvalidRoundId).map(RoundId))
    }
}
