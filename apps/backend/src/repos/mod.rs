//! Repository functions for domain layer.

pub mod players;
pub mod rounds;
pub mod scores;
pub mod tours;
