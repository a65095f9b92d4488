//! SeaORM adapter for scores repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, Order,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::{players, round_scores};

pub mod dto;

pub use dto::ScoreCreate;

/// Find all scores for a round with the player they belong to.
///
/// Rows come back in insertion order, which is placement order.
pub async fn find_all_by_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<(round_scores::Model, Option<players::Model>)>, sea_orm::DbErr> {
    round_scores::Entity::find()
        .filter(round_scores::Column::RoundId.eq(round_id))
        .order_by(round_scores::Column::Id, Order::Asc)
        .find_also_related(players::Entity)
        .all(conn)
        .await
}

/// Create a score record
pub async fn create_score(
    txn: &DatabaseTransaction,
    dto: ScoreCreate,
) -> Result<round_scores::Model, sea_orm::DbErr> {
    let score = round_scores::ActiveModel {
        id: sea_orm::NotSet,
        round_id: Set(dto.round_id),
        player_id: Set(dto.player_id),
        raw_score: Set(dto.raw_score),
        adjusted_score: Set(dto.adjusted_score),
        placement: Set(dto.placement),
        handicap_used: Set(dto.handicap_used),
        c2: Set(dto.c2),
        ctp: Set(dto.ctp),
        ace: Set(dto.ace),
    };

    score.insert(txn).await
}

/// Remove every score row of a round.
pub async fn delete_by_round(
    txn: &DatabaseTransaction,
    round_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = round_scores::Entity::delete_many()
        .filter(round_scores::Column::RoundId.eq(round_id))
        .exec(txn)
        .await?;
    Ok(res.rows_affected)
}
