use serde::{Deserialize, Serialize};

/// Event-wide progress, ordered from `Setup` to `Finalized`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    #[default]
    Setup,
    CaptainsAssigned,
    ParticipantsAssigned,
    Finalized,
}

impl WorkflowState {
    /// Moves forward to `next`, never backwards.
    pub fn advance_to(self, next: WorkflowState) -> WorkflowState {
        self.max(next)
    }

    pub fn is_finalized(self) -> bool {
        self == WorkflowState::Finalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_never_moves_backwards() {
        let state = WorkflowState::ParticipantsAssigned;
        assert_eq!(
            state.advance_to(WorkflowState::CaptainsAssigned),
            WorkflowState::ParticipantsAssigned
        );
        assert_eq!(
            state.advance_to(WorkflowState::Finalized),
            WorkflowState::Finalized
        );
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&WorkflowState::CaptainsAssigned).unwrap();
        assert_eq!(json, "\"captains_assigned\"");
    }
}
