//! Tours repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::tours_sea as tours_adapter;
use crate::entities::tours;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Tour domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub id: i64,
    pub name: String,
    pub created_at: time::OffsetDateTime,
}

impl From<tours::Model> for Tour {
    fn from(model: tours::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
        }
    }
}

pub async fn create_tour<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Tour, DomainError> {
    let tour = tours_adapter::create_tour(conn, tours_adapter::TourCreate::new(name)).await?;
    Ok(Tour::from(tour))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tour_id: i64,
) -> Result<Option<Tour>, DomainError> {
    let tour = tours_adapter::find_by_id(conn, tour_id).await?;
    Ok(tour.map(Tour::from))
}

/// Like `find_by_id`, but a missing tour is an error.
pub async fn require_tour<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tour_id: i64,
) -> Result<Tour, DomainError> {
    find_by_id(conn, tour_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Tour, format!("Tour {tour_id} not found"))
    })
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<Tour>, DomainError> {
    let tours = tours_adapter::list_all(conn).await?;
    Ok(tours.into_iter().map(Tour::from).collect())
}

/// Delete a tour with its players, rounds and scores.
pub async fn delete_tour(txn: &DatabaseTransaction, tour_id: i64) -> Result<(), DomainError> {
    let deleted = tours_adapter::delete_cascade(txn, tour_id).await?;
    if deleted == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Tour,
            format!("Tour {tour_id} not found"),
        ));
    }
    Ok(())
}
