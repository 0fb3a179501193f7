use actix_multipart::MultipartError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::error::{ParseError, ValidationError};
use common::requests::ErrorBody;
use std::fmt;

/// Request-level failures shown to the user.
///
/// Publish failures are not here: they are logged and suppressed by
/// [`crate::publish`].
#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    Parse(ParseError),
    Upload(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(e) => write!(f, "{e}"),
            AppError::Parse(e) => write!(f, "{e}"),
            AppError::Upload(msg) => write!(f, "{msg}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Parse(_) | AppError::Upload(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(_) => HttpResponse::build(self.status_code()).json(ErrorBody {
                error: self.to_string(),
            }),
            _ => HttpResponse::build(self.status_code()).body(format!("Error: {self}")),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e)
    }
}

impl From<ParseError> for AppError {
    fn from(e: ParseError) -> Self {
        AppError::Parse(e)
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::Upload(e.to_string())
    }
}
