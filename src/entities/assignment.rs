use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub participant_id: i32,
    #[serde(alias = "venue_id")]
    pub restaurant_id: i32,
    #[serde(default)]
    pub assigned_at: Option<NaiveDateTime>,
}
