use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::ExternalId).string().not_null())
                    .col(ColumnDef::new(Users::Username).string().not_null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // games
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Games::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Games::Type).string_len(20).not_null())
                    .col(ColumnDef::new(Games::PlayersNumber).integer().not_null())
                    .col(ColumnDef::new(Games::IsFinished).boolean().not_null())
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::FinishedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // players (composite PK game_id + user_id)
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Players::GameId).uuid().not_null())
                    .col(ColumnDef::new(Players::UserId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(Players::GameId)
                            .col(Players::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_game_id")
                            .from(Players::Table, Players::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_user_id")
                            .from(Players::Table, Players::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // winners (composite PK game_id + user_id)
        manager
            .create_table(
                Table::create()
                    .table(Winners::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Winners::GameId).uuid().not_null())
                    .col(ColumnDef::new(Winners::UserId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(Winners::GameId)
                            .col(Winners::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_winners_game_id")
                            .from(Winners::Table, Winners::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_winners_user_id")
                            .from(Winners::Table, Winners::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // sets
        manager
            .create_table(
                Table::create()
                    .table(Sets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Sets::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Sets::GameId).uuid().not_null())
                    .col(ColumnDef::new(Sets::RoundName).string().not_null())
                    .col(ColumnDef::new(Sets::RoundNumber).integer().not_null())
                    .col(ColumnDef::new(Sets::TrumpSuit).string_len(1).null())
                    .col(ColumnDef::new(Sets::TrumpValue).integer().null())
                    .col(ColumnDef::new(Sets::DealerId).uuid().not_null())
                    .col(ColumnDef::new(Sets::OpeningPlayerId).uuid().not_null())
                    .col(ColumnDef::new(Sets::IsCurrentRound).boolean().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sets_game_id")
                            .from(Sets::Table, Sets::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sets_dealer_id")
                            .from(Sets::Table, Sets::DealerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sets_opening_player_id")
                            .from(Sets::Table, Sets::OpeningPlayerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // dealings
        manager
            .create_table(
                Table::create()
                    .table(Dealings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Dealings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Dealings::SetId).uuid().not_null())
                    .col(ColumnDef::new(Dealings::UserId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dealings_set_id")
                            .from(Dealings::Table, Dealings::SetId)
                            .to(Sets::Table, Sets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dealings_user_id")
                            .from(Dealings::Table, Dealings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // entries
        manager
            .create_table(
                Table::create()
                    .table(Entries::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Entries::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Entries::SetId).uuid().not_null())
                    .col(ColumnDef::new(Entries::OwnerId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entries_set_id")
                            .from(Entries::Table, Entries::SetId)
                            .to(Sets::Table, Sets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entries_owner_id")
                            .from(Entries::Table, Entries::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // cards
        manager
            .create_table(
                Table::create()
                    .table(Cards::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Cards::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Cards::Suit).string_len(1).not_null())
                    .col(ColumnDef::new(Cards::Value).integer().not_null())
                    .col(ColumnDef::new(Cards::DealingId).uuid().null())
                    .col(ColumnDef::new(Cards::EntryId).uuid().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cards_dealing_id")
                            .from(Cards::Table, Cards::DealingId)
                            .to(Dealings::Table, Dealings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cards_entry_id")
                            .from(Cards::Table, Cards::EntryId)
                            .to(Entries::Table, Entries::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cards::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Entries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Dealings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Winners::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    ExternalId,
    Username,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Games {
    Table,
    Id,
    Type,
    PlayersNumber,
    IsFinished,
    CreatedAt,
    FinishedAt,
}

#[derive(DeriveIden)]
enum Players {
    Table,
    GameId,
    UserId,
}

#[derive(DeriveIden)]
enum Winners {
    Table,
    GameId,
    UserId,
}

#[derive(DeriveIden)]
enum Sets {
    Table,
    Id,
    GameId,
    RoundName,
    RoundNumber,
    TrumpSuit,
    TrumpValue,
    DealerId,
    OpeningPlayerId,
    IsCurrentRound,
}

#[derive(DeriveIden)]
enum Dealings {
    Table,
    Id,
    SetId,
    UserId,
}

#[derive(DeriveIden)]
enum Entries {
    Table,
    Id,
    SetId,
    OwnerId,
}

#[derive(DeriveIden)]
enum Cards {
    Table,
    Id,
    Suit,
    Value,
    DealingId,
    EntryId,
}
