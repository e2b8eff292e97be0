// Todo error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::response::ApiResponse;

/// Error kinds raised by the todo subsystem.
///
/// `NotFound` covers both a missing todo and a todo owned by another user;
/// the two cases are deliberately indistinguishable to the caller.
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("Todo not found")]
    NotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for TodoError {
    fn from(err: sqlx::Error) -> Self {
        TodoError::DatabaseError(err.to_string())
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            TodoError::NotFound => (StatusCode::NOT_FOUND, "Todo not found".to_string()),
            TodoError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            TodoError::DatabaseError(msg) => {
                error!("database error in todos: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ApiResponse::error(&message))).into_response()
    }
}
