use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantStatus {
    Registered,
    Cancelled,
    LateJoiner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: i32,
    pub attendee_name: String,
    pub attendee_email: String,
    pub is_table_captain: bool,
    pub status: ParticipantStatus,
    /// Role was set by hand and must survive attendee-system syncs.
    #[serde(default)]
    pub captain_overridden: bool,
    /// Email was set by hand and must survive attendee-system syncs.
    #[serde(default)]
    pub email_overridden: bool,
}

impl Model {
    pub fn is_cancelled(&self) -> bool {
        self.status == ParticipantStatus::Cancelled
    }

    /// A captain who has not cancelled.
    pub fn is_eligible_captain(&self) -> bool {
        self.is_table_captain && !self.is_cancelled()
    }
}
