use axum::{
    body,
    http::StatusCode,
    response::IntoResponse,
};
use user_service::errors::AppError;
use user_service::repository::StoreError;

#[test]
fn not_found_variants_map_to_404() {
    assert_eq!(AppError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(AppError::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
}

#[test]
fn bad_request_group_maps_to_400() {
    let errors = [
        AppError::MalformedJson {
            reason: "EOF while parsing".into(),
        },
        AppError::NotAnObject,
        AppError::MissingUserId,
        AppError::InvalidUserId,
    ];
    for e in errors {
        assert_eq!(e.status_code(), StatusCode::BAD_REQUEST, "{e}");
    }
}

#[test]
fn protocol_errors_keep_their_status() {
    assert_eq!(
        AppError::MethodNotAllowed.status_code(),
        StatusCode::METHOD_NOT_ALLOWED
    );
    assert_eq!(
        AppError::UnsupportedMediaType.status_code(),
        StatusCode::UNSUPPORTED_MEDIA_TYPE
    );
    let rejected = AppError::BodyRejected {
        status: StatusCode::PAYLOAD_TOO_LARGE,
        reason: "too big".into(),
    };
    assert_eq!(rejected.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    let bad_path = AppError::InvalidPath {
        status: StatusCode::BAD_REQUEST,
        reason: "Invalid URL".into(),
    };
    assert_eq!(bad_path.status_code(), StatusCode::BAD_REQUEST);
}

#[test]
fn internal_group_maps_to_500() {
    let e = AppError::from(StoreError::LockPoisoned);
    assert_eq!(e.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn not_found_body_is_exact() {
    let resp = AppError::UserNotFound.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], br#"{"error":"User not found"}"#);
}

#[tokio::test]
async fn internal_errors_do_not_leak_details() {
    let resp = AppError::from(StoreError::LockPoisoned).into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value, serde_json::json!({"error": "Internal server error"}));
}
