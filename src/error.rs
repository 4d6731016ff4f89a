use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::{allocation::AllocationError, workflow::WorkflowError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Allocation(#[from] AllocationError),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    #[error("random source lock poisoned")]
    RngPoisoned,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Allocation(_) | AppError::Workflow(WorkflowError::Allocation(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Workflow(WorkflowError::Finalized) => StatusCode::CONFLICT,
            AppError::Workflow(WorkflowError::UnknownParticipant(_)) => StatusCode::NOT_FOUND,
            AppError::RngPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("request failed: {self}");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
