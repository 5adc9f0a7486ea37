use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::cards::Suit;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub game_id: Uuid,
    pub round_name: String,
    pub round_number: i32,
    pub trump_suit: Option<Suit>,
    pub trump_value: Option<i32>,
    pub dealer_id: Uuid,
    pub opening_player_id: Uuid,
    pub is_current_round: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::games::Entity",
        from = "Column::GameId",
        to = "super::games::Column::Id"
    )]
    Game,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::DealerId",
        to = "super::users::Column::Id"
    )]
    Dealer,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::OpeningPlayerId",
        to = "super::users::Column::Id"
    )]
    OpeningPlayer,
    #[sea_orm(has_many = "super::dealings::Entity")]
    Dealings,
    #[sea_orm(has_many = "super::entries::Entity")]
    Entries,
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl Related<super::dealings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dealings.def()
    }
}

impl Related<super::entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
