#![allow(dead_code)]

//! Shared fixtures: a fresh migrated SQLite database per test, seed helpers
//! and an app wired the way `main` wires it.

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use tour_backend::config::db::{DbKind, RuntimeEnv};
use tour_backend::db::require_db;
use tour_backend::domain::{ScoreEntry, ScoreSheet};
use tour_backend::infra::state::build_state;
use tour_backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use tour_backend::repos::players::Player;
use tour_backend::repos::tours::Tour;
use tour_backend::routes;
use tour_backend::services::players::PlayerService;
use tour_backend::services::tours::TourService;
use tour_backend::AppState;

/// State backed by a private in-memory database with migrations applied.
pub async fn test_state() -> AppState {
    build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteMemory)
        .build()
        .await
        .expect("build sqlite test state")
}

pub async fn seed_tour(state: &AppState, name: &str) -> Tour {
    let db = require_db(state).expect("db");
    TourService::new()
        .create_tour(db, name)
        .await
        .expect("create tour")
}

pub async fn seed_player(state: &AppState, tour_id: i64, name: &str, handicap: i32) -> Player {
    let db = require_db(state).expect("db");
    PlayerService::new()
        .add_player(db, tour_id, name, Some(handicap))
        .await
        .expect("add player")
}

/// Current roster of a tour, by player id.
pub async fn roster(state: &AppState, tour_id: i64) -> Vec<Player> {
    let db = require_db(state).expect("db");
    PlayerService::new()
        .roster(db, tour_id)
        .await
        .expect("roster")
}

pub fn player<'a>(roster: &'a [Player], name: &str) -> &'a Player {
    roster
        .iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| panic!("player {name} not on roster"))
}

/// Sheet with only raw scores.
pub fn raw_sheet(scores: &[(i64, i32)]) -> ScoreSheet {
    scores.iter().fold(ScoreSheet::new(), |sheet, &(id, raw)| {
        sheet.with_entry(id, ScoreEntry::new(raw))
    })
}

/// Test app with the production routes and middleware stack (CORS aside).
pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}
