//! Round submission, correction and history.
//!
//! Writes here run inside one transaction and are expected to be called
//! while holding the tour's guard from `db::tour_locks`, so the roster read
//! and the totals update of one submission cannot interleave with another.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use serde::Serialize;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::domain::{apply_accrual, compute_round, edit_round, RecordedScore, ScoreSheet};
use crate::errors::domain::DomainError;
use crate::repos::players;
use crate::repos::rounds::{self, Round};
use crate::repos::scores::{self, RoundScore};
use crate::repos::tours;

#[derive(Debug, Clone, Serialize)]
pub struct RoundScoreView {
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

impl From<RoundScore> for RoundScoreView {
    fn from(s: RoundScore) -> Self {
        Self {
            player_id: s.player_id,
            player_name: s.player_name,
            raw_score: s.raw_score,
            adjusted_score: s.adjusted_score,
            placement: s.placement,
            handicap_used: s.handicap_used,
            c2: s.c2,
            ctp: s.ctp,
            ace: s.ace,
        }
    }
}

/// A round with its rows in placement order.
#[derive(Debug, Clone, Serialize)]
pub struct RoundView {
    pub id: i64,
    pub tour_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub scores: Vec<RoundScoreView>,
}

impl RoundView {
    fn new(round: Round, scores: Vec<RoundScore>) -> Self {
        Self {
            id: round.id,
            tour_id: round.tour_id,
            created_at: round.created_at,
            scores: scores.into_iter().map(RoundScoreView::from).collect(),
        }
    }

    pub fn score_for(&self, player_id: i64) -> Option<&RoundScoreView> {
        self.scores.iter().find(|s| s.player_id == player_id)
    }
}

pub struct RoundService;

impl RoundService {
    pub fn new() -> Self {
        Self
    }

    /// Score a new round against the current roster and accrue totals.
    pub async fn submit_round(
        &self,
        txn: &DatabaseTransaction,
        tour_id: i64,
        sheet: &ScoreSheet,
    ) -> Result<RoundView, DomainError> {
        tours::require_tour(txn, tour_id).await?;

        let roster: Vec<_> = players::find_all_by_tour(txn, tour_id)
            .await?
            .iter()
            .map(|p| p.roster_entry())
            .collect();
        let result = compute_round(&roster, sheet);

        let round = rounds::create_round(txn, tour_id).await?;
        scores::create_scores(txn, round.id, &result).await?;

        for delta in apply_accrual(&result) {
            debug!(
                tour_id,
                round_id = round.id,
                player_id = delta.player_id,
                points = delta.points,
                handicap = delta.handicap,
                "accrual applied"
            );
            players::apply_delta(txn, &delta).await?;
        }

        info!(
            tour_id,
            round_id = round.id,
            players = result.len(),
            "round submitted"
        );
        self.load_view(txn, round).await
    }

    /// Recompute a recorded round from new inputs.
    ///
    /// Rows keep their recorded handicap. Player totals are left as they are.
    pub async fn edit_round(
        &self,
        txn: &DatabaseTransaction,
        tour_id: i64,
        round_id: i64,
        sheet: &ScoreSheet,
    ) -> Result<RoundView, DomainError> {
        let round = rounds::find_in_tour(txn, tour_id, round_id).await?;

        let existing: Vec<RecordedScore> = scores::find_all_by_round(txn, round_id)
            .await?
            .iter()
            .map(RoundScore::recorded)
            .collect();
        let result = edit_round(&existing, sheet);

        scores::delete_by_round(txn, round_id).await?;
        scores::create_scores(txn, round_id, &result).await?;

        info!(tour_id, round_id, players = result.len(), "round edited");
        self.load_view(txn, round).await
    }

    /// Remove a round and its rows. Totals are not reversed.
    pub async fn delete_round(
        &self,
        txn: &DatabaseTransaction,
        tour_id: i64,
        round_id: i64,
    ) -> Result<(), DomainError> {
        rounds::find_in_tour(txn, tour_id, round_id).await?;
        scores::delete_by_round(txn, round_id).await?;
        rounds::delete_round(txn, round_id).await?;

        info!(tour_id, round_id, "round deleted");
        Ok(())
    }

    pub async fn get_round<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        tour_id: i64,
        round_id: i64,
    ) -> Result<RoundView, DomainError> {
        let round = rounds::find_in_tour(conn, tour_id, round_id).await?;
        self.load_view(conn, round).await
    }

    /// Every round of a tour, newest first.
    pub async fn round_history<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        tour_id: i64,
    ) -> Result<Vec<RoundView>, DomainError> {
        tours::require_tour(conn, tour_id).await?;

        let mut views = Vec::new();
        for round in rounds::find_all_by_tour(conn, tour_id).await? {
            views.push(self.load_view(conn, round).await?);
        }
        Ok(views)
    }

    async fn load_view<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        round: Round,
    ) -> Result<RoundView, DomainError> {
        let rows = scores::find_all_by_round(conn, round.id).await?;
        Ok(RoundView::new(round, rows))
    }
}

impl Default for RoundService {
    fn default() -> Self {
        Self::new()
    }
}
