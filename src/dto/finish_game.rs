use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishGameRequest {
    pub winner_ids: Vec<Uuid>,
}
