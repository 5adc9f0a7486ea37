use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessCardRequest {
    pub card_id: Uuid,
    pub set_id: Uuid,
    pub owner_id: Uuid,
    pub is_round_end: bool,
}
