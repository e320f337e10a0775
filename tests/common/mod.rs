#![allow(dead_code)]

use axum::{
    body::{self, Body},
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use user_service::{app, AppState};

pub fn make_user_router() -> Router {
    app(AppState::in_memory())
}

pub async fn request(app: &Router, method: Method, uri: &str, body: Option<&str>) -> Response<Body> {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(match body {
            Some(b) => Body::from(b.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    app.clone().oneshot(req).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    request(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> Response<Body> {
    request(app, Method::POST, uri, Some(&body.to_string())).await
}

pub async fn read_json(resp: Response<Body>) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

pub fn content_type(resp: &Response<Body>) -> &str {
    resp.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}
