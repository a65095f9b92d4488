//! Scores repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::scores_sea as scores_adapter;
use crate::domain::{RecordedScore, RoundResult};
use crate::entities::{players, round_scores};
use crate::errors::domain::DomainError;

/// One recorded line of a round, joined with the player's name.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundScore {
    pub id: i64,
    pub round_id: i64,
    pub player_id: i64,
    pub player_name: String,
    pub raw_score: i32,
    pub adjusted_score: i32,
    pub placement: i32,
    pub handicap_used: i32,
    pub c2: i32,
    pub ctp: bool,
    pub ace: bool,
}

impl RoundScore {
    pub fn recorded(&self) -> RecordedScore {
        RecordedScore {
            player_id: self.player_id,
            name: self.player_name.clone(),
            handicap_used: self.handicap_used,
        }
    }
}

impl From<(round_scores::Model, Option<players::Model>)> for RoundScore {
    fn from((score, player): (round_scores::Model, Option<players::Model>)) -> Self {
        Self {
            id: score.id,
            round_id: score.round_id,
            player_id: score.player_id,
            player_name: player.map(|p| p.name).unwrap_or_default(),
            raw_score: score.raw_score,
            adjusted_score: score.adjusted_score,
            placement: score.placement,
            handicap_used: score.handicap_used,
            c2: score.c2,
            ctp: score.ctp,
            ace: score.ace,
        }
    }
}

/// Persist every row of a computed round, in placement order.
pub async fn create_scores(
    txn: &DatabaseTransaction,
    round_id: i64,
    result: &RoundResult,
) -> Result<(), DomainError> {
    for row in &result.rows {
        let dto = scores_adapter::ScoreCreate {
            round_id,
            player_id: row.player_id,
            raw_score: row.raw_score,
            adjusted_score: row.adjusted_score,
            placement: row.placement,
            handicap_used: row.handicap_used,
            c2: row.c2,
            ctp: row.ctp,
            ace: row.ace,
        };
        scores_adapter::create_score(txn, dto).await?;
    }
    Ok(())
}

/// Scores of a round in placement order.
pub async fn find_all_by_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<RoundScore>, DomainError> {
    let rows = scores_adapter::find_all_by_round(conn, round_id).await?;
    let mut scores: Vec<RoundScore> = rows.into_iter().map(RoundScore::from).collect();
    scores.sort_by_key(|s| (s.placement, s.id));
    Ok(scores)
}

pub async fn delete_by_round(txn: &DatabaseTransaction, round_id: i64) -> Result<(), DomainError> {
    scores_adapter::delete_by_round(txn, round_id).await?;
    Ok(())
}
