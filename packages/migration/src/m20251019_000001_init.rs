use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Tours {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(Iden)]
enum Players {
    Table,
    Id,
    TourId,
    Name,
    Handicap,
    Points,
    TotalC2,
    TotalCtp,
    TotalAce,
    CreatedAt,
}

#[derive(Iden)]
enum Rounds {
    Table,
    Id,
    TourId,
    CreatedAt,
}

#[derive(Iden)]
enum RoundScores {
    Table,
    Id,
    RoundId,
    PlayerId,
    RawScore,
    AdjustedScore,
    Placement,
    HandicapUsed,
    C2,
    Ctp,
    Ace,
}

fn id_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .primary_key()
        .auto_increment()
        .to_owned()
}

fn int_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).integer().not_null().default(0).to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tours::Table)
                    .if_not_exists()
                    .col(id_col(Tours::Id))
                    .col(ColumnDef::new(Tours::Name).string().not_null())
                    .col(
                        ColumnDef::new(Tours::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(id_col(Players::Id))
                    .col(ColumnDef::new(Players::TourId).big_integer().not_null())
                    .col(ColumnDef::new(Players::Name).string().not_null())
                    .col(int_col(Players::Handicap))
                    .col(int_col(Players::Points))
                    .col(int_col(Players::TotalC2))
                    .col(int_col(Players::TotalCtp))
                    .col(int_col(Players::TotalAce))
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_tour_id")
                            .from(Players::Table, Players::TourId)
                            .to(Tours::Table, Tours::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_players_tour_id")
                    .table(Players::Table)
                    .col(Players::TourId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_players_tour_name")
                    .table(Players::Table)
                    .col(Players::TourId)
                    .col(Players::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Rounds::Table)
                    .if_not_exists()
                    .col(id_col(Rounds::Id))
                    .col(ColumnDef::new(Rounds::TourId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Rounds::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rounds_tour_id")
                            .from(Rounds::Table, Rounds::TourId)
                            .to(Tours::Table, Tours::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_rounds_tour_id")
                    .table(Rounds::Table)
                    .col(Rounds::TourId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RoundScores::Table)
                    .if_not_exists()
                    .col(id_col(RoundScores::Id))
                    .col(ColumnDef::new(RoundScores::RoundId).big_integer().not_null())
                    .col(ColumnDef::new(RoundScores::PlayerId).big_integer().not_null())
                    .col(int_col(RoundScores::RawScore))
                    .col(int_col(RoundScores::AdjustedScore))
                    .col(ColumnDef::new(RoundScores::Placement).integer().not_null())
                    .col(int_col(RoundScores::HandicapUsed))
                    .col(int_col(RoundScores::C2))
                    .col(
                        ColumnDef::new(RoundScores::Ctp)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(RoundScores::Ace)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_round_scores_round_id")
                            .from(RoundScores::Table, RoundScores::RoundId)
                            .to(Rounds::Table, Rounds::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_round_scores_player_id")
                            .from(RoundScores::Table, RoundScores::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_round_scores_round_id")
                    .table(RoundScores::Table)
                    .col(RoundScores::RoundId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_round_scores_round_player")
                    .table(RoundScores::Table)
                    .col(RoundScores::RoundId)
                    .col(RoundScores::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoundScores::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rounds::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tours::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
