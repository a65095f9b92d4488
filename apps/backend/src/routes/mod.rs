use actix_web::web;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod health;
pub mod players;
pub mod rounds;
pub mod tours;

/// Form bodies that fail to decode become problem+json like every other error.
fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "form decoding failed");
        AppError::bad_request(ErrorCode::BadRequest, "Invalid form body").into()
    })
}

/// Register every route. Shared by `main` and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config());

    health::configure_routes(cfg);

    cfg.service(
        web::scope("/api/tours")
            .configure(tours::configure_routes)
            .configure(players::configure_routes)
            .configure(rounds::configure_routes),
    );
}
