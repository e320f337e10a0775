//! HTTP request handlers for the user directory

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::{HealthCheckResponse, UserListResponse, UserRecord};
use crate::AppState;

/// Health check endpoint
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse::healthy())
}

/// `GET /api/v1/users`
pub async fn list_users(State(state): State<AppState>) -> Result<Json<UserListResponse>, AppError> {
    let users = state.users.list().await?;
    Ok(Json(UserListResponse { users }))
}

/// `GET /api/v1/users/:id`
///
/// The path segment is the store key as-is. A miss is an ordinary client
/// outcome and is only logged at debug level.
pub async fn get_user(
    State(state): State<AppState>,
    user_id: Result<Path<String>, PathRejection>,
) -> Result<Json<UserRecord>, AppError> {
    let Path(user_id) = user_id?;
    match state.users.find_by_id(&user_id).await? {
        Some(user) => Ok(Json(user)),
        None => {
            tracing::debug!(user_id = %user_id, "User lookup missed");
            Err(AppError::UserNotFound)
        }
    }
}

/// `POST /api/v1/users`
///
/// Unconditional upsert: the body is stored under its `id`, replacing any
/// previous record in full, and echoed back with `201 Created` either way.
/// Bodies are checked before the store is touched, so a rejected request
/// leaves it unchanged.
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<UserRecord>), AppError> {
    let Json(body) = payload?;
    let user = UserRecord::try_from(body)?;

    let outcome = state.users.upsert(user.clone()).await?;
    tracing::info!(
        user_id = %user.key(),
        replaced = outcome.replaced.is_some(),
        total = outcome.total,
        "User stored"
    );

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
