//! Adapters for external dependencies.

pub mod players_sea;
pub mod rounds_sea;
pub mod scores_sea;
pub mod tours_sea;
