use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};

use crate::utils::{FieldError, ValidationError};

/// Wire shape of every error response.
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

#[derive(Responder)]
pub enum Error {
    #[response(status = 400)]
    BadRequest(Json<ErrorBody>),
    #[response(status = 404)]
    NotFound(Json<ErrorBody>),
}

impl Error {
    pub fn not_found() -> Self {
        Error::NotFound(Json(ErrorBody {
            error: "Bookmark not found".to_string(),
            details: None,
        }))
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::BadRequest(Json(ErrorBody {
            error: "Validation error".to_string(),
            details: Some(e.details),
        }))
    }
}

#[catch(500)]
pub fn internal_error() -> Json<ErrorBody> {
    Json(ErrorBody {
        error: "Internal server error".to_string(),
        details: None,
    })
}
