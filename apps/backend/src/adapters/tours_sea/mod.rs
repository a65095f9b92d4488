//! SeaORM adapter for tours repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::{players, round_scores, rounds, tours};

pub mod dto;

pub use dto::TourCreate;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tour_id: i64,
) -> Result<Option<tours::Model>, sea_orm::DbErr> {
    tours::Entity::find_by_id(tour_id).one(conn).await
}

/// All tours, newest first.
pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<tours::Model>, sea_orm::DbErr> {
    tours::Entity::find()
        .order_by_desc(tours::Column::Id)
        .all(conn)
        .await
}

pub async fn create_tour<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TourCreate,
) -> Result<tours::Model, sea_orm::DbErr> {
    let tour = tours::ActiveModel {
        id: sea_orm::NotSet,
        name: Set(dto.name),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    tour.insert(conn).await
}

/// Delete a tour and everything it owns.
///
/// Children are removed explicitly so the result does not depend on the
/// engine enforcing `ON DELETE CASCADE`. Returns rows deleted from `tours`.
pub async fn delete_cascade(
    txn: &DatabaseTransaction,
    tour_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let round_ids: Vec<i64> = rounds::Entity::find()
        .filter(rounds::Column::TourId.eq(tour_id))
        .all(txn)
        .await?
        .into_iter()
        .map(|r| r.id)
        .collect();

    if !round_ids.is_empty() {
        round_scores::Entity::delete_many()
            .filter(round_scores::Column::RoundId.is_in(round_ids))
            .exec(txn)
            .await?;
    }

    rounds::Entity::delete_many()
        .filter(rounds::Column::TourId.eq(tour_id))
        .exec(txn)
        .await?;

    players::Entity::delete_many()
        .filter(players::Column::TourId.eq(tour_id))
        .exec(txn)
        .await?;

    let res = tours::Entity::delete_by_id(tour_id).exec(txn).await?;
    Ok(res.rows_affected)
}
