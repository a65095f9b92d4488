//! DTOs for rounds_sea adapter.

/// DTO for creating a new round.
#[derive(Debug, Clone)]
pub struct RoundCreate {
    pub tour_id: i64,
}
