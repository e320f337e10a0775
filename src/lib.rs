#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, future_incompatible)]

//! In-memory user directory served over HTTP/JSON.
//!
//! | Method | Path                 | Success                   |
//! |--------|----------------------|---------------------------|
//! | GET    | `/health`            | `200` service identity    |
//! | GET    | `/api/v1/users`      | `200` `{"users": [...]}`  |
//! | GET    | `/api/v1/users/:id`  | `200` stored record       |
//! | POST   | `/api/v1/users`      | `201` stored record       |

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod shutdown;
pub mod telemetry;

use handlers::{
    create_user, get_user, health_check, list_users, method_not_allowed, route_not_found,
};
use repository::{InMemoryUserRepository, UserRepository};

pub use errors::AppError;
pub use models::{HealthCheckResponse, UserListResponse, UserRecord};

/// Shared handler state; owns the user store
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// State backed by a fresh, empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUserRepository::new()))
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check).fallback(method_not_allowed))
        .route(
            "/api/v1/users",
            get(list_users)
                .post(create_user)
                .fallback(method_not_allowed),
        )
        .route("/api/v1/users/:id", get(get_user).fallback(method_not_allowed))
        .fallback(route_not_found)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
