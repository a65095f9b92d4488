use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Tour-scoped player with running totals.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "tour_id")]
    pub tour_id: i64,
    pub name: String,
    pub handicap: i32,
    pub points: i32,
    #[sea_orm(column_name = "total_c2")]
    pub total_c2: i32,
    #[sea_orm(column_name = "total_ctp")]
    pub total_ctp: i32,
    #[sea_orm(column_name = "total_ace")]
    pub total_ace: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tours::Entity",
        from = "Column::TourId",
        to = "super::tours::Column::Id"
    )]
    Tour,
    #[sea_orm(has_many = "super::round_scores::Entity")]
    RoundScores,
}

impl Related<super::tours::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tour.def()
    }
}

impl Related<super::round_scores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoundScores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
