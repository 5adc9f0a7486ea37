//! Seat rotation module
//!
//! A circular cursor over the seated player list. The cursor starts at
//! a random seat once per session and then walks seating order forever,
//! wrapping after the last seat. The session builder uses it to hand
//! the dealer and opening-player roles around the table.

use rand::Rng;

use crate::dto::create_game::LobbyUserInfo;

/// Restartable circular cursor over the seated players
#[derive(Debug, Clone)]
pub(crate) struct RotationCursor {
    players: Vec<LobbyUserInfo>,
    position: usize,
}

impl RotationCursor {
    /// Start the cursor at a uniformly random seat
    pub(crate) fn new(players: &[LobbyUserInfo], rng: &mut impl Rng) -> Self {
        Self {
            players: players.to_vec(),
            position: rng.gen_range(0..players.len()),
        }
    }

    /// Yield the next player in seating order, wrapping after the last seat
    pub(crate) fn next_player(&mut self) -> LobbyUserInfo {
        let player = self.players[self.position].clone();
        self.position = (self.position + 1) % self.players.len();
        player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn seated(count: usize) -> Vec<LobbyUserInfo> {
        (0..count)
            .map(|seat| LobbyUserInfo {
                id: Uuid::new_v4(),
                username: format!("player-{seat}"),
            })
            .collect()
    }

    #[test]
    fn test_one_lap_visits_every_seat_once() {
        let players = seated(4);
        let mut cursor = RotationCursor::new(&players, &mut rand::thread_rng());

        let mut seen = Vec::new();
        for _ in 0..players.len() {
            seen.push(cursor.next_player().id);
        }
        for player in &players {
            assert_eq!(seen.iter().filter(|id| **id == player.id).count(), 1);
        }
    }

    #[test]
    fn test_cursor_wraps_and_repeats_the_same_order() {
        let players = seated(3);
        let mut cursor = RotationCursor::new(&players, &mut rand::thread_rng());

        let first_lap: Vec<Uuid> = (0..3).map(|_| cursor.next_player().id).collect();
        let second_lap: Vec<Uuid> = (0..3).map(|_| cursor.next_player().id).collect();
        assert_eq!(first_lap, second_lap);
    }

    #[test]
    fn test_successive_draws_are_adjacent_in_seating_order() {
        let players = seated(5);
        let mut cursor = RotationCursor::new(&players, &mut rand::thread_rng());

        let seat_of = |id: Uuid| players.iter().position(|player| player.id == id).unwrap();

        let mut previous = cursor.next_player();
        for _ in 0..12 {
            let current = cursor.next_player();
            assert_eq!(
                seat_of(current.id),
                (seat_of(previous.id) + 1) % players.len()
            );
            previous = current;
        }
    }
}
