//! Session builder module
//!
//! Materializes a whole multiplayer session up front: every set in
//! schedule order, its deal, its trump, and its dealer/opening player.
//! Planning is pure and happens before the transaction; persistence
//! runs inside the caller's transaction so a failed build leaves no
//! partial game behind.

use chrono::Utc;
use rand::Rng;
use sea_orm::{ActiveModelTrait, DatabaseTransaction, DbErr, Set};
use uuid::Uuid;

use crate::dto::create_game::LobbyUserInfo;
use crate::entity::cards::Suit;
use crate::entity::{cards, dealings, games, players, sets};
use crate::game_management::dealing::{deal_round, PlayerHand};
use crate::game_management::rotation::RotationCursor;
use crate::game_management::rounds::generate_round_names;

/// Everything needed to persist one set of a planned session
#[derive(Debug, Clone)]
pub(crate) struct SetPlan {
    pub round_name: String,
    pub round_number: i32,
    pub trump_suit: Option<Suit>,
    pub trump_value: Option<i32>,
    pub dealer_id: Uuid,
    pub opening_player_id: Uuid,
    pub hands: Vec<PlayerHand>,
}

/// Plan the whole session: one entry per scheduled round name, in order.
///
/// The previous opening player becomes the next dealer and the cursor
/// yields the next opening player, so the two roles stay adjacent in
/// seating order and every seat passes through both over time.
pub(crate) fn build_session_plan(
    players: &[LobbyUserInfo],
    rng: &mut impl Rng,
) -> Vec<SetPlan> {
    let mut cursor = RotationCursor::new(players, rng);
    let mut dealer = cursor.next_player();
    let mut opening_player = cursor.next_player();

    let mut plan = Vec::new();
    for (index, round_name) in generate_round_names(players.len()).into_iter().enumerate() {
        let dealt = deal_round(&round_name, players, rng);
        plan.push(SetPlan {
            round_name,
            round_number: index as i32 + 1,
            trump_suit: dealt.trump_suit,
            trump_value: dealt.trump_value,
            dealer_id: dealer.id,
            opening_player_id: opening_player.id,
            hands: dealt.hands,
        });
        dealer = opening_player;
        opening_player = cursor.next_player();
    }
    plan
}

/// Persist a planned session: the game row, its player associations,
/// and every set with its dealings and dealt cards. Only the first set
/// is current.
pub(crate) async fn persist_session(
    txn: &DatabaseTransaction,
    game_id: Uuid,
    seated: &[LobbyUserInfo],
    plan: Vec<SetPlan>,
) -> Result<games::Model, DbErr> {
    let game = games::ActiveModel {
        id: Set(game_id),
        game_type: Set(games::GameType::Multiplayer),
        players_number: Set(seated.len() as i32),
        is_finished: Set(false),
        created_at: Set(Utc::now().into()),
        finished_at: Set(None),
    }
    .insert(txn)
    .await?;

    for player in seated {
        players::ActiveModel {
            game_id: Set(game_id),
            user_id: Set(player.id),
        }
        .insert(txn)
        .await?;
    }

    for set_plan in plan {
        let set = sets::ActiveModel {
            id: Set(Uuid::new_v4()),
            game_id: Set(game_id),
            round_name: Set(set_plan.round_name),
            round_number: Set(set_plan.round_number),
            trump_suit: Set(set_plan.trump_suit),
            trump_value: Set(set_plan.trump_value),
            dealer_id: Set(set_plan.dealer_id),
            opening_player_id: Set(set_plan.opening_player_id),
            is_current_round: Set(set_plan.round_number == 1),
        }
        .insert(txn)
        .await?;

        for hand in set_plan.hands {
            let dealing = dealings::ActiveModel {
                id: Set(Uuid::new_v4()),
                set_id: Set(set.id),
                user_id: Set(hand.user.id),
            }
            .insert(txn)
            .await?;

            for card in hand.cards {
                cards::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    suit: Set(card.suit),
                    value: Set(card.value),
                    dealing_id: Set(Some(dealing.id)),
                    entry_id: Set(None),
                }
                .insert(txn)
                .await?;
            }
        }
    }

    Ok(game)
}
