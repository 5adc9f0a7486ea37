use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A seated player as the lobby hands it over: identity only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LobbyUserInfo {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGameRequest {
    pub players: Vec<LobbyUserInfo>,
    pub create_game: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameInfoResponse {
    pub id: Uuid,
    pub players: Vec<LobbyUserInfo>,
    pub created_at: DateTime<FixedOffset>,
}
