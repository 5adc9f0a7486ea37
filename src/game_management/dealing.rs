//! Dealing module
//!
//! Draws every player's hand for one set from a single shrinking pool
//! (sampling without replacement across the whole round, so no card can
//! land in two hands) and picks the trump indicator from whatever the
//! deal left over. Pure logic over a caller-supplied RNG, no DB I/O.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::dto::create_game::LobbyUserInfo;
use crate::entity::cards::Suit;
use crate::game_management::deck::{full_deck, Card, SUITS};
use crate::game_management::rounds::{cards_per_player, NO_TRUMP_ROUND};

/// One player's hand for one set
#[derive(Debug, Clone)]
pub(crate) struct PlayerHand {
    pub user: LobbyUserInfo,
    pub cards: Vec<Card>,
}

/// The outcome of dealing one set: hands plus the round's trump
#[derive(Debug, Clone)]
pub(crate) struct DealtRound {
    pub hands: Vec<PlayerHand>,
    pub trump_suit: Option<Suit>,
    pub trump_value: Option<i32>,
}

/// Deal one set: draw each hand card by card from the remaining pool,
/// uniformly at random, then pick the trump from the leftovers.
///
/// A round that declares more cards than the deck holds is a
/// configuration error, not a runtime condition.
pub(crate) fn deal_round(
    round_name: &str,
    players: &[LobbyUserInfo],
    rng: &mut impl Rng,
) -> DealtRound {
    let count = cards_per_player(round_name, players.len());
    let mut pool = full_deck();
    assert!(
        count * players.len() <= pool.len(),
        "round '{round_name}' deals {} cards but the deck holds {}",
        count * players.len(),
        pool.len()
    );

    let mut hands = Vec::with_capacity(players.len());
    for player in players {
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            let drawn = pool.swap_remove(rng.gen_range(0..pool.len()));
            cards.push(drawn);
        }
        hands.push(PlayerHand {
            user: player.clone(),
            cards,
        });
    }

    let (trump_suit, trump_value) = pick_trump(round_name, &pool, rng);

    DealtRound {
        hands,
        trump_suit,
        trump_value,
    }
}

/// Pick the trump for a set from the cards the deal left unused.
///
/// An exhausted pool means the round used the whole deck: the trump is
/// known by suit alone, with no indicator card to reveal a value.
/// Otherwise a random leftover card is the indicator. A no-trump round,
/// or the seven of spades as indicator, suppresses the trump entirely.
pub(crate) fn pick_trump(
    round_name: &str,
    unused: &[Card],
    rng: &mut impl Rng,
) -> (Option<Suit>, Option<i32>) {
    let (suit, value) = match unused.choose(rng) {
        None => (Some(SUITS[rng.gen_range(0..SUITS.len())]), None),
        Some(indicator) => (Some(indicator.suit), Some(indicator.value)),
    };

    if round_name == NO_TRUMP_ROUND || (suit == Some(Suit::Spades) && value == Some(7)) {
        (None, None)
    } else {
        (suit, value)
    }
}
