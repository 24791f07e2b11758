use crate::Error;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;
use strum::Display;

#[derive(Debug)]
pub struct RestApiError {
    pub code: RestApiErrorCode,
    pub message: String,
}

impl RestApiError {
    pub fn new(code: RestApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_input() -> Self {
        Self::new(
            RestApiErrorCode::InvalidInput,
            crate::lead::MISSING_FIELDS,
        )
    }

    pub fn method_not_allowed() -> Self {
        Self::new(RestApiErrorCode::MethodNotAllowed, "Method not allowed")
    }

    pub fn internal() -> Self {
        Self::new(RestApiErrorCode::Internal, "Internal server error")
    }
}

#[derive(Debug, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum RestApiErrorCode {
    InvalidInput,
    MethodNotAllowed,
    Internal,
}

impl RestApiErrorCode {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for RestApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

// Internal details never reach the caller
impl From<Error> for RestApiError {
    fn from(error: Error) -> Self {
        match error {
            Error::InvalidInput(_) => RestApiError::invalid_input(),
            _ => RestApiError::internal(),
        }
    }
}

impl ResponseError for RestApiError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.message }))
    }

    fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }
}
