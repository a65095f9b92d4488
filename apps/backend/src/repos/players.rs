//! Player repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::players_sea as players_adapter;
use crate::domain::{PlayerDelta, RosterEntry};
use crate::entities::players;
use crate::errors::domain::DomainError;

/// Player domain model with running totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub tour_id: i64,
    pub name: String,
    pub handicap: i32,
    pub points: i32,
    pub total_c2: i32,
    pub total_ctp: i32,
    pub total_ace: i32,
    pub created_at: time::OffsetDateTime,
}

impl Player {
    pub fn roster_entry(&self) -> RosterEntry {
        RosterEntry::new(self.id, self.name.clone(), self.handicap)
    }
}

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Self {
            id: model.id,
            tour_id: model.tour_id,
            name: model.name,
            handicap: model.handicap,
            points: model.points,
            total_c2: model.total_c2,
            total_ctp: model.total_ctp,
            total_ace: model.total_ace,
            created_at: model.created_at,
        }
    }
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tour_id: i64,
    name: &str,
    handicap: i32,
) -> Result<Player, DomainError> {
    let dto = players_adapter::PlayerCreate {
        tour_id,
        name: name.to_string(),
        handicap,
    };
    let player = players_adapter::create_player(conn, dto).await?;
    Ok(Player::from(player))
}

/// Players of a tour in insertion order.
pub async fn find_all_by_tour<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tour_id: i64,
) -> Result<Vec<Player>, DomainError> {
    let players = players_adapter::find_all_by_tour(conn, tour_id).await?;
    Ok(players.into_iter().map(Player::from).collect())
}

/// Add one round's accrual to a player's totals.
pub async fn apply_delta<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    delta: &PlayerDelta,
) -> Result<(), DomainError> {
    let dto = players_adapter::PlayerTotalsDelta {
        player_id: delta.player_id,
        points: delta.points,
        handicap: delta.handicap,
        c2: delta.c2,
        ctp: delta.ctp,
        ace: delta.ace,
    };
    players_adapter::apply_totals_delta(conn, dto).await?;
    Ok(())
}
