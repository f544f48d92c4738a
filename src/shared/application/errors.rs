use crate::shared::core::table::InputError;
use crate::shared::infrastructure::report_sink::SinkError;
use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl ApplicationError {
    /// A report that cannot be built from the uploaded export is the caller's problem.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::Input(InputError::MissingColumns { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
