//! Tour setup service.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use serde::Serialize;
use time::OffsetDateTime;
use tracing::info;

use crate::errors::domain::DomainError;
use crate::repos::tours::{self, Tour};

#[derive(Debug, Clone, Serialize)]
pub struct TourView {
    pub id: i64,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Tour> for TourView {
    fn from(tour: Tour) -> Self {
        Self {
            id: tour.id,
            name: tour.name,
            created_at: tour.created_at,
        }
    }
}

/// Trim a setup name and reject blanks.
pub(crate) fn clean_name(raw: &str, what: &str) -> Result<String, DomainError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(DomainError::validation(format!("{what} name must not be empty")));
    }
    Ok(name.to_string())
}

pub struct TourService;

impl TourService {
    pub fn new() -> Self {
        Self
    }

    pub async fn create_tour<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        name: &str,
    ) -> Result<Tour, DomainError> {
        let name = clean_name(name, "Tour")?;
        let tour = tours::create_tour(conn, &name).await?;
        info!(tour_id = tour.id, "tour created");
        Ok(tour)
    }

    pub async fn list_tours<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Tour>, DomainError> {
        tours::list_all(conn).await
    }

    pub async fn get_tour<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        tour_id: i64,
    ) -> Result<Tour, DomainError> {
        tours::require_tour(conn, tour_id).await
    }

    /// Remove a tour with its players, rounds and scores.
    pub async fn delete_tour(
        &self,
        txn: &DatabaseTransaction,
        tour_id: i64,
    ) -> Result<(), DomainError> {
        tours::delete_tour(txn, tour_id).await?;
        info!(tour_id, "tour deleted");
        Ok(())
    }
}

impl Default for TourService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_name_trims() {
        assert_eq!(clean_name("  Summer League ", "Tour").unwrap(), "Summer League");
    }

    #[test]
    fn clean_name_rejects_blank() {
        let err = clean_name("   ", "Tour").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
