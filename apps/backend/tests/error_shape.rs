mod common;

use actix_web::http::StatusCode;
use actix_web::{test, web, App, HttpResponse};
use backend_test_support::problem_details::assert_problem;
use tour_backend::errors::ErrorCode;
use tour_backend::middleware::RequestTrace;
use tour_backend::AppError;

async fn failing_handler() -> Result<HttpResponse, AppError> {
    Err(AppError::invalid(ErrorCode::ValidationError, "Example failure"))
}

#[actix_web::test]
async fn problem_details_carry_request_trace_id() {
    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .route("/_test/error", web::get().to(failing_handler)),
    )
    .await;

    let req = test::TestRequest::get().uri("/_test/error").to_request();
    let resp = test::call_service(&app, req).await;

    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("x-request-id header");

    let problem = assert_problem(resp, "VALIDATION_ERROR", StatusCode::BAD_REQUEST).await;
    assert_eq!(problem.detail, "Example failure");
    assert_eq!(problem.title, "Validation Error");
    assert_eq!(problem.trace_id, request_id);
}

#[actix_web::test]
async fn problem_outside_request_scope_uses_unknown_trace_id() {
    let app = test::init_service(
        App::new().route("/_test/error", web::get().to(failing_handler)),
    )
    .await;

    let req = test::TestRequest::get().uri("/_test/error").to_request();
    let problem = assert_problem(
        test::call_service(&app, req).await,
        "VALIDATION_ERROR",
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(problem.trace_id, "unknown");
}
