//! Rounds repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::rounds_sea as rounds_adapter;
use crate::entities::rounds;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Round domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub id: i64,
    pub tour_id: i64,
    pub created_at: time::OffsetDateTime,
}

impl From<rounds::Model> for Round {
    fn from(model: rounds::Model) -> Self {
        Self {
            id: model.id,
            tour_id: model.tour_id,
            created_at: model.created_at,
        }
    }
}

pub async fn create_round(txn: &DatabaseTransaction, tour_id: i64) -> Result<Round, DomainError> {
    let round = rounds_adapter::create_round(txn, rounds_adapter::RoundCreate { tour_id }).await?;
    Ok(Round::from(round))
}

/// Find a round that belongs to `tour_id`.
///
/// A round of another tour is reported as missing.
pub async fn find_in_tour<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tour_id: i64,
    round_id: i64,
) -> Result<Round, DomainError> {
    match rounds_adapter::find_by_id(conn, round_id).await? {
        Some(round) if round.tour_id == tour_id => Ok(Round::from(round)),
        _ => Err(DomainError::not_found(
            NotFoundKind::Round,
            format!("Round {round_id} not found in tour {tour_id}"),
        )),
    }
}

/// Rounds of a tour, newest first.
pub async fn find_all_by_tour<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tour_id: i64,
) -> Result<Vec<Round>, DomainError> {
    let rounds = rounds_adapter::find_all_by_tour(conn, tour_id).await?;
    Ok(rounds.into_iter().map(Round::from).collect())
}

pub async fn delete_round(txn: &DatabaseTransaction, round_id: i64) -> Result<(), DomainError> {
    rounds_adapter::delete_round(txn, round_id).await?;
    Ok(())
}
