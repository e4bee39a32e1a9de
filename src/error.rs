use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

use crate::validation::ValidationError;

pub type Result<T> = std::result::Result<T, SplitError>;

#[derive(Error, Debug, PartialEq)]
pub enum SplitError {
    #[error("Invalid expense: {0}")]
    InvalidExpense(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Participant not found: {0}")]
    ParticipantNotFound(String),
}

impl ResponseError for SplitError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        HttpResponse::build(status_code).json(json!({
            "error": {
                "code": status_code.as_u16(),
                "message": self.to_string(),
                "type": self.error_type()
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            SplitError::InvalidExpense(_) => StatusCode::BAD_REQUEST,
            SplitError::Validation(_) => StatusCode::BAD_REQUEST,
            SplitError::ParticipantNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl SplitError {
    fn error_type(&self) -> &str {
        match self {
            SplitError::InvalidExpense(_) => "invalid_expense",
            SplitError::Validation(_) => "validation_error",
            SplitError::ParticipantNotFound(_) => "not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_bad_requests() {
        let err = SplitError::from(ValidationError::EmptyName);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Please enter a name");
    }

    #[test]
    fn unknown_participant_is_not_found() {
        let err = SplitError::ParticipantNotFound("p-1".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_type(), "not_found");
    }
}
