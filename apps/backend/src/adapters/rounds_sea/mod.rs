//! SeaORM adapter for rounds repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::rounds;

pub mod dto;

pub use dto::RoundCreate;

/// Find a round by ID
pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Option<rounds::Model>, sea_orm::DbErr> {
    rounds::Entity::find_by_id(round_id).one(conn).await
}

/// Find all rounds for a tour, newest first.
pub async fn find_all_by_tour<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tour_id: i64,
) -> Result<Vec<rounds::Model>, sea_orm::DbErr> {
    rounds::Entity::find()
        .filter(rounds::Column::TourId.eq(tour_id))
        .order_by_desc(rounds::Column::Id)
        .all(conn)
        .await
}

/// Create a new round
pub async fn create_round(
    txn: &DatabaseTransaction,
    dto: RoundCreate,
) -> Result<rounds::Model, sea_orm::DbErr> {
    let round = rounds::ActiveModel {
        id: sea_orm::NotSet,
        tour_id: Set(dto.tour_id),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    round.insert(txn).await
}

/// Delete a round row. Its scores must already be gone.
pub async fn delete_round(txn: &DatabaseTransaction, round_id: i64) -> Result<u64, sea_orm::DbErr> {
    let res = rounds::Entity::delete_by_id(round_id).exec(txn).await?;
    Ok(res.rows_affected)
}
