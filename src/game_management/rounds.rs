//! Round schedule module
//!
//! Generates the fixed order of sets a session plays, and the hand
//! size each round name implies. Pure logic, no DB I/O.

use crate::game_management::deck::DECK_SIZE;

/// Round name of the blind rounds (full deal, trump indicator never shown)
pub const BLIND_ROUND: &str = "BR";

/// Round name of the no-trump rounds (full deal, trump forced absent)
pub const NO_TRUMP_ROUND: &str = "NTR";

/// Produce the ordered round names for a whole session.
///
/// With `m = 36 / players_number` the schedule is: `n` rounds of "1",
/// ascending "2".."m-1", `n` rounds of the peak "m", descending
/// "m-1".."2", `n` rounds of "1", then `n` blind rounds and `n`
/// no-trump rounds. The 1-based position in this list is the set's
/// round number.
pub fn generate_round_names(players_number: usize) -> Vec<String> {
    let max_cards = DECK_SIZE / players_number;

    let mut names: Vec<String> = Vec::new();
    names.extend(std::iter::repeat("1".to_string()).take(players_number));
    names.extend((2..max_cards).map(|size| size.to_string()));
    names.extend(std::iter::repeat(max_cards.to_string()).take(players_number));
    names.extend((2..max_cards).rev().map(|size| size.to_string()));
    names.extend(std::iter::repeat("1".to_string()).take(players_number));
    names.extend(std::iter::repeat(BLIND_ROUND.to_string()).take(players_number));
    names.extend(std::iter::repeat(NO_TRUMP_ROUND.to_string()).take(players_number));
    names
}

/// Hand size for a round: the numeric round name, or a full deal for
/// the blind and no-trump rounds
pub fn cards_per_player(round_name: &str, players_number: usize) -> usize {
    round_name
        .parse::<usize>()
        .unwrap_or(DECK_SIZE / players_number)
}
