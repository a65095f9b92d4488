//! Player setup and roster reads.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::info;

use super::tours::clean_name;
use crate::errors::domain::DomainError;
use crate::repos::players::{self, Player};
use crate::repos::tours;

/// Starting handicap when none is given.
pub const DEFAULT_HANDICAP: i32 = 0;

/// Roster line with running totals.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub id: i64,
    pub name: String,
    pub handicap: i32,
    pub points: i32,
    pub total_c2: i32,
    pub total_ctp: i32,
    pub total_ace: i32,
}

impl From<Player> for PlayerView {
    fn from(p: Player) -> Self {
        Self {
            id: p.id,
            name: p.name,
            handicap: p.handicap,
            points: p.points,
            total_c2: p.total_c2,
            total_ctp: p.total_ctp,
            total_ace: p.total_ace,
        }
    }
}

/// Player domain service.
pub struct PlayerService;

impl PlayerService {
    pub fn new() -> Self {
        Self
    }

    /// Add a player to a tour. Names are unique per tour.
    pub async fn add_player<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        tour_id: i64,
        name: &str,
        handicap: Option<i32>,
    ) -> Result<Player, DomainError> {
        let name = clean_name(name, "Player")?;
        tours::require_tour(conn, tour_id).await?;

        let player = players::create_player(
            conn,
            tour_id,
            &name,
            handicap.unwrap_or(DEFAULT_HANDICAP),
        )
        .await?;
        info!(tour_id, player_id = player.id, "player added");
        Ok(player)
    }

    /// Tour roster ordered by player id.
    pub async fn roster<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        tour_id: i64,
    ) -> Result<Vec<Player>, DomainError> {
        tours::require_tour(conn, tour_id).await?;
        players::find_all_by_tour(conn, tour_id).await
    }
}

impl Default for PlayerService {
    fn default() -> Self {
        Self::new()
    }
}
