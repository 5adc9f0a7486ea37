//! Trick (entry) coordination
//!
//! Moves a played card from its owner's dealing into the entry for the
//! named set and, when the caller signals the end of the round, hands
//! the current-round flag to the next set. Every function here expects
//! to run inside the caller's transaction so that a failure rolls the
//! whole play back.

use sea_orm::sea_query::LockType;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, DbErr, EntityTrait, QueryFilter,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::dto::process_card::ProcessCardRequest;
use crate::entity::{cards, entries, games, sets};

/// Apply one card play: resolve the entry for `(set, owner)`, flip the
/// card's ownership from its dealing to that entry, and advance the
/// current round when this play closes it.
pub(crate) async fn process_card_transaction(
    game_id: Uuid,
    request: ProcessCardRequest,
    txn: &DatabaseTransaction,
) -> Result<(), DbErr> {
    // Lock the game row so plays for one game cannot interleave
    games::Entity::find_by_id(game_id)
        .lock(LockType::Update)
        .one(txn)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("game {game_id} not found")))?;

    let set = sets::Entity::find_by_id(request.set_id)
        .one(txn)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("set {} not found", request.set_id)))?;
    if set.game_id != game_id {
        return Err(DbErr::Custom(format!(
            "set {} does not belong to game {game_id}",
            set.id
        )));
    }

    let entry = get_or_create_entry(txn, set.id, request.owner_id).await?;

    let card = cards::Entity::find_by_id(request.card_id)
        .one(txn)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("card {} not found", request.card_id)))?;

    // Hand -> trick: a dealt card has exactly one owning reference
    let mut card_model: cards::ActiveModel = card.into();
    card_model.dealing_id = Set(None);
    card_model.entry_id = Set(Some(entry.id));
    card_model.update(txn).await?;

    if request.is_round_end {
        make_new_current(txn, game_id, set).await?;
    }

    Ok(())
}

/// Resolve the entry for a `(set, owner)` pair, creating it on the
/// first play. Replays reuse the same entry rather than duplicating it.
async fn get_or_create_entry(
    txn: &DatabaseTransaction,
    set_id: Uuid,
    owner_id: Uuid,
) -> Result<entries::Model, DbErr> {
    let existing = entries::Entity::find()
        .filter(entries::Column::SetId.eq(set_id))
        .filter(entries::Column::OwnerId.eq(owner_id))
        .one(txn)
        .await?;

    if let Some(entry) = existing {
        return Ok(entry);
    }

    entries::ActiveModel {
        id: Set(Uuid::new_v4()),
        set_id: Set(set_id),
        owner_id: Set(owner_id),
    }
    .insert(txn)
    .await
}

/// Hand the current-round flag from the finishing set to its successor
/// by round number. With no successor the game is left with zero
/// current sets, which the view reports as a finished game.
async fn make_new_current(
    txn: &DatabaseTransaction,
    game_id: Uuid,
    finished: sets::Model,
) -> Result<(), DbErr> {
    if !finished.is_current_round {
        return Err(DbErr::Custom(format!(
            "set {} is not the current round and cannot be finished",
            finished.id
        )));
    }
    let next_number = finished.round_number + 1;

    let mut finished_model: sets::ActiveModel = finished.into();
    finished_model.is_current_round = Set(false);
    finished_model.update(txn).await?;

    let next = sets::Entity::find()
        .filter(sets::Column::GameId.eq(game_id))
        .filter(sets::Column::RoundNumber.eq(next_number))
        .one(txn)
        .await?;

    if let Some(next) = next {
        let mut next_model: sets::ActiveModel = next.into();
        next_model.is_current_round = Set(true);
        next_model.update(txn).await?;
    }

    Ok(())
}
