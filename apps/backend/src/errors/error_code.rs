//! Error codes for the tour backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Invalid tour ID provided
    InvalidTourId,
    /// Invalid round ID provided
    InvalidRoundId,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    TourNotFound,
    PlayerNotFound,
    RoundNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Player name already used in this tour
    PlayerNameTaken,
    /// Player already has a score row in this round
    DuplicateRoundScore,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// Canonical string for this error code, as it appears in responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidTourId => "INVALID_TOUR_ID",
            Self::InvalidRoundId => "INVALID_ROUND_ID",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::TourNotFound => "TOUR_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::RoundNotFound => "ROUND_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::PlayerNameTaken => "PLAYER_NAME_TAKEN",
            Self::DuplicateRoundScore => "DUPLICATE_ROUND_SCORE",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
