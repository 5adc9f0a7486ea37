use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::cards::Suit;

/// Consistent picture of the current set: trump, remaining hands, and
/// the trick piles played so far
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullGameInfo {
    pub set_id: Uuid,
    pub round_name: String,
    pub round_number: i32,
    pub trump_suit: Option<Suit>,
    pub trump_value: Option<i32>,
    pub users: Vec<UserCardsInfo>,
    pub entries: Vec<EntryCardsInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCardsInfo {
    pub id: Uuid,
    pub username: String,
    pub cards: Vec<CardInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryCardsInfo {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub cards: Vec<CardInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardInfo {
    pub id: Uuid,
    pub suit: Suit,
    pub value: i32,
}
