//! Game view assembly
//!
//! Rebuilds the caller-facing picture of a game from persisted records:
//! the current set's trump, every player's remaining hand, and the
//! trick piles played so far. Read-only; runs inside the caller's
//! read transaction so the picture is never torn mid-play.

use sea_orm::{ColumnTrait, DatabaseTransaction, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::dto::full_game_info::{CardInfo, EntryCardsInfo, FullGameInfo, UserCardsInfo};
use crate::entity::{cards, dealings, entries, games, sets, users};

/// Assemble the current set's view, or `None` when the game has no
/// current set left (it is finished). An empty `entries` list is a
/// different answer: the round is live but nothing has been played yet.
pub(crate) async fn get_full_game_info(
    txn: &DatabaseTransaction,
    game_id: Uuid,
) -> Result<Option<FullGameInfo>, DbErr> {
    games::Entity::find_by_id(game_id)
        .one(txn)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("game {game_id} not found")))?;

    let set = match sets::Entity::find()
        .filter(sets::Column::GameId.eq(game_id))
        .filter(sets::Column::IsCurrentRound.eq(true))
        .one(txn)
        .await?
    {
        Some(set) => set,
        None => return Ok(None),
    };

    // Hands: cards still attached to the set's dealings
    let mut user_infos = Vec::new();
    let set_dealings = dealings::Entity::find()
        .filter(dealings::Column::SetId.eq(set.id))
        .all(txn)
        .await?;
    for dealing in &set_dealings {
        let user = users::Entity::find_by_id(dealing.user_id)
            .one(txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("user {} not found", dealing.user_id)))?;
        let hand = cards::Entity::find()
            .filter(cards::Column::DealingId.eq(dealing.id))
            .all(txn)
            .await?;
        user_infos.push(UserCardsInfo {
            id: user.id,
            username: user.username,
            cards: hand.into_iter().map(card_info).collect(),
        });
    }

    // Trick piles: cards reassigned to the set's entries, per owner
    let mut entry_infos = Vec::new();
    let set_entries = entries::Entity::find()
        .filter(entries::Column::SetId.eq(set.id))
        .all(txn)
        .await?;
    for entry in set_entries {
        let played = cards::Entity::find()
            .filter(cards::Column::EntryId.eq(entry.id))
            .all(txn)
            .await?;
        entry_infos.push(EntryCardsInfo {
            id: entry.id,
            owner_id: entry.owner_id,
            cards: played.into_iter().map(card_info).collect(),
        });
    }

    Ok(Some(FullGameInfo {
        set_id: set.id,
        round_name: set.round_name,
        round_number: set.round_number,
        trump_suit: set.trump_suit,
        trump_value: set.trump_value,
        users: user_infos,
        entries: entry_infos,
    }))
}

fn card_info(card: cards::Model) -> CardInfo {
    CardInfo {
        id: card.id,
        suit: card.suit,
        value: card.value,
    }
}
