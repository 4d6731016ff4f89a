use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub max_seats: i32,
    #[serde(default)]
    pub travel_time_minutes: Option<i32>,
    #[serde(default)]
    pub assigned_captain_id: Option<i32>,
}

impl Model {
    /// Seats left for participants once the captain has taken theirs.
    pub fn effective_capacity(&self) -> usize {
        usize::try_from(self.max_seats.saturating_sub(1)).unwrap_or(0)
    }

    pub fn has_captain(&self) -> bool {
        self.assigned_captain_id.is_some()
    }
}
