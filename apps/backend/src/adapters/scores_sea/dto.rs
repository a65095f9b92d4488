//! DTOs for scores_sea adapter.

/// DTO for recording one player's line in a round.
#[derive(Debug, Clone)]
pub struct ScoreCreate {
    pub round_id: i64,
    pub player_id: i64,
    pub raw_score: i32,
    pub adjusted_score: i32,
    pub placement: i32,
    pub handicap_used: i32,
    pub c2: i32,
    pub ctp: bool,
    pub ace: bool,
}
