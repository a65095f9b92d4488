//! DTOs for players_sea adapter.

/// DTO for adding a player to a tour.
#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub tour_id: i64,
    pub name: String,
    pub handicap: i32,
}

/// Increments applied to a player's running totals after a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerTotalsDelta {
    pub player_id: i64,
    pub points: i32,
    pub handicap: i32,
    pub c2: i32,
    pub ctp: i32,
    pub ace: i32,
}
