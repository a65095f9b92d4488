//! `with_txn` commits on Ok and rolls back on Err.

mod common;
mod support;

use support::{roster, seed_tour, test_state};
use tour_backend::db::txn::with_txn;
use tour_backend::error::AppError;
use tour_backend::errors::ErrorCode;
use tour_backend::repos::players;
use tour_backend::AppState;

#[actix_web::test]
async fn commits_when_closure_succeeds() {
    let state = test_state().await;
    let tour = seed_tour(&state, "Commit").await;
    let tour_id = tour.id;

    with_txn(&state, move |txn| {
        Box::pin(async move { Ok(players::create_player(txn, tour_id, "Alice", 0).await?) })
    })
    .await
    .unwrap();

    assert_eq!(roster(&state, tour.id).await.len(), 1);
}

#[actix_web::test]
async fn rolls_back_when_closure_fails() {
    let state = test_state().await;
    let tour = seed_tour(&state, "Rollback").await;
    let tour_id = tour.id;

    let result: Result<(), AppError> = with_txn(&state, move |txn| {
        Box::pin(async move {
            players::create_player(txn, tour_id, "Alice", 0).await?;
            Err(AppError::internal("abort after insert"))
        })
    })
    .await;

    assert!(result.is_err());
    assert!(roster(&state, tour.id).await.is_empty());
}

#[actix_web::test]
async fn without_db_is_unavailable() {
    let state = AppState::without_db();

    let err = with_txn(&state, |_txn| Box::pin(async { Ok(()) }))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::DbUnavailable);
}
