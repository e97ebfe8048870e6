// errors.rs
use crate::api::ApiError;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB, property API).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Property service error: {0}")]
    Upstream(String),

    #[error("Database Error: {0}")]
    DbError(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl From<ApiError> for ServerError {
    fn from(err: ApiError) -> Self {
        ServerError::Upstream(err.user_message())
    }
}

impl From<rusqlite::Error> for ServerError {
    fn from(err: rusqlite::Error) -> Self {
        ServerError::DbError(err.to_string())
    }
}
