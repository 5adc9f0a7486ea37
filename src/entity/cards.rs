use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cards")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub suit: Suit,
    pub value: i32,
    pub dealing_id: Option<Uuid>,
    pub entry_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum Suit {
    #[sea_orm(string_value = "H")]
    #[serde(rename = "H")]
    Hearts,
    #[sea_orm(string_value = "D")]
    #[serde(rename = "D")]
    Diamonds,
    #[sea_orm(string_value = "C")]
    #[serde(rename = "C")]
    Clubs,
    #[sea_orm(string_value = "S")]
    #[serde(rename = "S")]
    Spades,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dealings::Entity",
        from = "Column::DealingId",
        to = "super::dealings::Column::Id"
    )]
    Dealing,
    #[sea_orm(
        belongs_to = "super::entries::Entity",
        from = "Column::EntryId",
        to = "super::entries::Column::Id"
    )]
    Entry,
}

impl Related<super::dealings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dealing.def()
    }
}

impl Related<super::entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
