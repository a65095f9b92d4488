//! Problem Details assertions for HTTP tests.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Mirror of the backend's RFC 7807 body.
#[derive(Debug, Deserialize)]
pub struct ProblemBody {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Assert that `resp` is a problem+json error with the given code and status.
///
/// Also checks that the `x-trace-id` header matches the body's `trace_id`.
pub async fn assert_problem(
    resp: ServiceResponse<BoxBody>,
    expected_code: &str,
    expected_status: StatusCode,
) -> ProblemBody {
    assert_eq!(resp.status(), expected_status);

    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/problem+json"),
        "unexpected content-type {content_type}"
    );

    let header_trace = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("x-trace-id header should be present");

    let body = actix_web::test::read_body(resp).await;
    let problem: ProblemBody =
        serde_json::from_slice(&body).expect("body should be ProblemDetails JSON");

    assert_eq!(problem.trace_id, header_trace, "trace_id parity");
    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert_eq!(problem.type_, format!("/errors/{expected_code}"));
    problem
}
