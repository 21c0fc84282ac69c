//! HTTP error mapping.
//!
//! Callers only ever see one of three fixed messages; the underlying cause
//! is logged where it happens.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::recipes::ServiceError;

pub const MISSING_FIELDS_MESSAGE: &str = "Title, ingredients, and instructions are required.";
pub const READ_FAILED_MESSAGE: &str = "Could not read recipes.";
pub const SAVE_FAILED_MESSAGE: &str = "Could not save recipe.";

#[derive(Debug, Error)]
pub enum HttpError {
    /// The creation body lacked a required field or had the wrong shape.
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields,

    /// Listing failed in the store.
    #[error("{}", READ_FAILED_MESSAGE)]
    ReadFailed,

    /// Creation failed in the store.
    #[error("{}", SAVE_FAILED_MESSAGE)]
    SaveFailed,

    /// The body could not be read at all (too large, aborted stream).
    /// Answered with the extractor's own status.
    #[error("{0}")]
    Body(JsonRejection),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::MissingFields => StatusCode::BAD_REQUEST,
            HttpError::ReadFailed | HttpError::SaveFailed => StatusCode::INTERNAL_SERVER_ERROR,
            HttpError::Body(rejection) => rejection.status(),
        }
    }

    /// Map a rejected JSON body. Wrong content type, bad syntax and
    /// wrong shapes all count as missing fields.
    pub fn from_rejection(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_) => HttpError::MissingFields,
            other => HttpError::Body(other),
        }
    }

    /// Map a failure from `RecipeService::list_all`.
    pub fn from_list(_err: ServiceError) -> Self {
        HttpError::ReadFailed
    }

    /// Map a failure from `RecipeService::create`.
    pub fn from_create(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(_) => HttpError::MissingFields,
            ServiceError::Storage(_) => HttpError::SaveFailed,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if let HttpError::Body(rejection) = self {
            return rejection.into_response();
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
