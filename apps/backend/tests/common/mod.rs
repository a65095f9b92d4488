#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use serde::de::DeserializeOwned;

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Assert the status and decode a JSON body.
pub async fn json_body<T: DeserializeOwned>(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
) -> T {
    let status = resp.status();
    let body = test::read_body(resp).await;
    assert_eq!(
        status,
        expected_status,
        "unexpected status, body: {}",
        String::from_utf8_lossy(&body)
    );
    serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "failed to decode body ({e}): {}",
            String::from_utf8_lossy(&body)
        )
    })
}
