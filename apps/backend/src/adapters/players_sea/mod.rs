//! SeaORM adapter for player repository - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::players;

pub mod dto;

pub use dto::{PlayerCreate, PlayerTotalsDelta};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

/// Tour roster in insertion order.
pub async fn find_all_by_tour<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tour_id: i64,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::TourId.eq(tour_id))
        .order_by_asc(players::Column::Id)
        .all(conn)
        .await
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<players::Model, sea_orm::DbErr> {
    let player = players::ActiveModel {
        id: sea_orm::NotSet,
        tour_id: Set(dto.tour_id),
        name: Set(dto.name),
        handicap: Set(dto.handicap),
        points: Set(0),
        total_c2: Set(0),
        total_ctp: Set(0),
        total_ace: Set(0),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    player.insert(conn).await
}

/// Add `delta` to the player's totals in a single UPDATE.
///
/// Returns the number of rows touched (0 when the player is gone).
pub async fn apply_totals_delta<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    delta: PlayerTotalsDelta,
) -> Result<u64, sea_orm::DbErr> {
    let res = players::Entity::update_many()
        .col_expr(
            players::Column::Points,
            Expr::col(players::Column::Points).add(delta.points),
        )
        .col_expr(
            players::Column::Handicap,
            Expr::col(players::Column::Handicap).add(delta.handicap),
        )
        .col_expr(
            players::Column::TotalC2,
            Expr::col(players::Column::TotalC2).add(delta.c2),
        )
        .col_expr(
            players::Column::TotalCtp,
            Expr::col(players::Column::TotalCtp).add(delta.ctp),
        )
        .col_expr(
            players::Column::TotalAce,
            Expr::col(players::Column::TotalAce).add(delta.ace),
        )
        .filter(players::Column::Id.eq(delta.player_id))
        .exec(conn)
        .await?;

    Ok(res.rows_affected)
}
