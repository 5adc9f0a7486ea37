pub mod create_game;
pub mod finish_game;
pub mod full_game_info;
pub mod process_card;
