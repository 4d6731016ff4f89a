#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    #[error("not enough eligible captains: need {required}, have {available}")]
    InsufficientCaptains { required: usize, available: usize },
}
