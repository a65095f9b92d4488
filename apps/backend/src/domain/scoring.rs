//! Round scoring: handicap adjustment, placements, and season accrual.
//!
//! Everything here is pure. Persistence of the results and of the per-player
//! deltas is the caller's job.

use serde::Serialize;

use crate::domain::score_sheet::ScoreSheet;

/// A player eligible for a round, with the handicap to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub player_id: i64,
    pub name: String,
    pub handicap: i32,
}

impl RosterEntry {
    pub fn new(player_id: i64, name: impl Into<String>, handicap: i32) -> Self {
        Self {
            player_id,
            name: name.into(),
            handicap,
        }
    }
}

/// A previously stored score row, as needed to recompute its round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedScore {
    pub player_id: i64,
    pub name: String,
    pub handicap_used: i32,
}

/// One player's computed line in a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredRow {
    pub player_id: i64,
    pub name: String,
    pub raw_score: i32,
    pub adjusted_score: i32,
    pub placement: i32,
    pub handicap_used: i32,
    pub c2: i32,
    pub ctp: bool,
    pub ace: bool,
}

/// Computed round, rows in placement order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub rows: Vec<ScoredRow>,
}

impl RoundResult {
    pub fn row_for(&self, player_id: i64) -> Option<&ScoredRow> {
        self.rows.iter().find(|row| row.player_id == player_id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Change to apply to a player's running totals after a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlayerDelta {
    pub player_id: i64,
    pub points: i32,
    pub handicap: i32,
    pub c2: i32,
    pub ctp: i32,
    pub ace: i32,
}

/// Points and handicap change earned by a placement.
pub fn placement_award(placement: i32) -> (i32, i32) {
    match placement {
        1 => (3, -1),
        2 => (2, 0),
        3 => (1, 1),
        _ => (0, 0),
    }
}

/// Score a round for the given roster.
///
/// Placements go to ascending adjusted score. Ties keep roster order, so the
/// first-listed player takes the better placement.
pub fn compute_round(players: &[RosterEntry], sheet: &ScoreSheet) -> RoundResult {
    let mut rows: Vec<ScoredRow> = players
        .iter()
        .map(|player| {
            let entry = sheet.entry(player.player_id);
            ScoredRow {
                player_id: player.player_id,
                name: player.name.clone(),
                raw_score: entry.raw_score,
                // Saturates at the i32 bounds; equals raw - handicap for any
                // realistic score.
                adjusted_score: entry.raw_score.saturating_sub(player.handicap),
                placement: 0,
                handicap_used: player.handicap,
                c2: entry.c2,
                ctp: entry.ctp,
                ace: entry.ace,
            }
        })
        .collect();

    // sort_by_key is stable
    rows.sort_by_key(|row| row.adjusted_score);

    for (idx, row) in rows.iter_mut().enumerate() {
        row.placement = (idx + 1) as i32;
    }

    RoundResult { rows }
}

/// Per-player deltas for a scored round.
pub fn apply_accrual(result: &RoundResult) -> Vec<PlayerDelta> {
    result
        .rows
        .iter()
        .map(|row| {
            let (points, handicap) = placement_award(row.placement);
            PlayerDelta {
                player_id: row.player_id,
                points,
                handicap,
                c2: row.c2.max(0),
                ctp: i32::from(row.ctp),
                ace: i32::from(row.ace),
            }
        })
        .collect()
}

/// Recompute an existing round from new input.
///
/// Each row keeps the handicap it was recorded with; the live handicap of
/// the player is never consulted. Only players already in the round are
/// scored, in the order given.
pub fn edit_round(existing: &[RecordedScore], sheet: &ScoreSheet) -> RoundResult {
    let roster: Vec<RosterEntry> = existing
        .iter()
        .map(|score| RosterEntry::new(score.player_id, score.name.clone(), score.handicap_used))
        .collect();

    compute_round(&roster, sheet)
}
