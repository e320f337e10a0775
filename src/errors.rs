use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::repository::StoreError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("User not found")]
    UserNotFound,

    #[error("Not found")]
    RouteNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{reason}")]
    MalformedJson { reason: String },

    #[error("Expected request with `Content-Type: application/json`")]
    UnsupportedMediaType,

    #[error("{reason}")]
    BodyRejected { status: StatusCode, reason: String },

    #[error("{reason}")]
    InvalidPath { status: StatusCode, reason: String },

    #[error("User record must be a JSON object")]
    NotAnObject,

    #[error("User record must contain an id")]
    MissingUserId,

    #[error("User id must be a string")]
    InvalidUserId,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UserNotFound | AppError::RouteNotFound => StatusCode::NOT_FOUND,

            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,

            AppError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,

            AppError::BodyRejected { status, .. } | AppError::InvalidPath { status, .. } => {
                *status
            }

            AppError::MalformedJson { .. }
            | AppError::NotAnObject
            | AppError::MissingUserId
            | AppError::InvalidUserId => StatusCode::BAD_REQUEST,

            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => AppError::UnsupportedMediaType,
            JsonRejection::JsonSyntaxError(err) => AppError::MalformedJson {
                reason: err.body_text(),
            },
            JsonRejection::JsonDataError(err) => AppError::MalformedJson {
                reason: err.body_text(),
            },
            other => AppError::BodyRejected {
                status: other.status(),
                reason: other.body_text(),
            },
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidPath {
            status: rejection.status(),
            reason: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal details stay in the logs
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
