pub use super::assignment::Model as Assignment;
pub use super::participant::{Model as Participant, ParticipantStatus};
pub use super::restaurant::Model as Restaurant;
pub use super::workflow::WorkflowState;

pub type ParticipantId = i32;
pub type RestaurantId = i32;
