//! HTTP flows for tours and players.

mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem;
use common::json_body;
use serde_json::{json, Value};
use support::{create_test_app, test_state};

#[actix_web::test]
async fn create_list_get_tour() {
    let app = create_test_app(test_state().await).await;

    let req = test::TestRequest::post()
        .uri("/api/tours")
        .set_json(json!({"name": "Summer League"}))
        .to_request();
    let created: Value = json_body(test::call_service(&app, req).await, StatusCode::CREATED).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Summer League");
    assert!(created["created_at"].is_string());

    let req = test::TestRequest::get().uri("/api/tours").to_request();
    let list: Vec<Value> = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(list.len(), 1);

    let req = test::TestRequest::get()
        .uri(&format!("/api/tours/{id}"))
        .to_request();
    let tour: Value = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(tour["id"], id);
}

#[actix_web::test]
async fn blank_tour_name_is_validation_error() {
    let app = create_test_app(test_state().await).await;

    let req = test::TestRequest::post()
        .uri("/api/tours")
        .set_json(json!({"name": "   "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "VALIDATION_ERROR", StatusCode::BAD_REQUEST).await;
}

#[actix_web::test]
async fn malformed_json_is_bad_request() {
    let app = create_test_app(test_state().await).await;

    let req = test::TestRequest::post()
        .uri("/api/tours")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"name": "#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let problem = assert_problem(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST).await;
    assert!(problem.detail.starts_with("Invalid JSON"));
}

#[actix_web::test]
async fn unknown_and_invalid_tour_ids() {
    let app = create_test_app(test_state().await).await;

    let req = test::TestRequest::get().uri("/api/tours/42").to_request();
    assert_problem(
        test::call_service(&app, req).await,
        "TOUR_NOT_FOUND",
        StatusCode::NOT_FOUND,
    )
    .await;

    for bad in ["abc", "0", "-1"] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/tours/{bad}/players"))
            .to_request();
        assert_problem(
            test::call_service(&app, req).await,
            "INVALID_TOUR_ID",
            StatusCode::BAD_REQUEST,
        )
        .await;
    }
}

#[actix_web::test]
async fn players_are_added_and_listed_with_totals() {
    let app = create_test_app(test_state().await).await;

    let req = test::TestRequest::post()
        .uri("/api/tours")
        .set_json(json!({"name": "Roster"}))
        .to_request();
    let tour: Value = json_body(test::call_service(&app, req).await, StatusCode::CREATED).await;
    let tour_id = tour["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/tours/{tour_id}/players"))
        .set_json(json!({"name": "Alice", "handicap": 3}))
        .to_request();
    let alice: Value = json_body(test::call_service(&app, req).await, StatusCode::CREATED).await;
    assert_eq!(alice["handicap"], 3);
    assert_eq!(alice["points"], 0);

    let req = test::TestRequest::post()
        .uri(&format!("/api/tours/{tour_id}/players"))
        .set_json(json!({"name": "Bob"}))
        .to_request();
    let bob: Value = json_body(test::call_service(&app, req).await, StatusCode::CREATED).await;
    assert_eq!(bob["handicap"], 0);

    let req = test::TestRequest::post()
        .uri(&format!("/api/tours/{tour_id}/players"))
        .set_json(json!({"name": "Alice"}))
        .to_request();
    assert_problem(
        test::call_service(&app, req).await,
        "PLAYER_NAME_TAKEN",
        StatusCode::CONFLICT,
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/tours/{tour_id}/players"))
        .to_request();
    let roster: Vec<Value> = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    let names: Vec<&str> = roster.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Alice", "Bob"]);
    for key in ["total_c2", "total_ctp", "total_ace"] {
        assert_eq!(roster[0][key], 0);
    }
}

#[actix_web::test]
async fn delete_tour_returns_no_content_then_not_found() {
    let app = create_test_app(test_state().await).await;

    let req = test::TestRequest::post()
        .uri("/api/tours")
        .set_json(json!({"name": "Short lived"}))
        .to_request();
    let tour: Value = json_body(test::call_service(&app, req).await, StatusCode::CREATED).await;
    let uri = format!("/api/tours/{}", tour["id"]);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    assert_problem(
        test::call_service(&app, req).await,
        "TOUR_NOT_FOUND",
        StatusCode::NOT_FOUND,
    )
    .await;
}
