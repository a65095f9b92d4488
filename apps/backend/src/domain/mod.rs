//! Pure scoring logic for tour rounds.

pub mod score_sheet;
pub mod scoring;

#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_scoring;

pub use score_sheet::{ScoreEntry, ScoreSheet};
pub use scoring::{
    apply_accrual, compute_round, edit_round, placement_award, PlayerDelta, RecordedScore,
    RosterEntry, RoundResult, ScoredRow,
};
