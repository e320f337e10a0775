//! Data models for the user directory

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::errors::AppError;

/// Identity reported by the health endpoint
pub const SERVICE_NAME: &str = "user-service";

/// A schema-less user document.
///
/// Only the `id` field is interpreted: it becomes the store key. Every other
/// field is carried through untouched and serialized back in the order the
/// client sent it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct UserRecord {
    key: String,
    document: Map<String, Value>,
}

impl UserRecord {
    /// Store key derived from the document's `id` field
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }
}

impl TryFrom<Value> for UserRecord {
    type Error = AppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(document) = value else {
            return Err(AppError::NotAnObject);
        };
        let key = record_key(document.get("id"))?;
        Ok(Self { key, document })
    }
}

impl Serialize for UserRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.document.serialize(serializer)
    }
}

/// Derive the store key from a record's `id` value.
///
/// Only strings are keys, used verbatim. A numeric `42` is rejected rather
/// than folded onto the string `"42"`.
pub fn record_key(id: Option<&Value>) -> Result<String, AppError> {
    match id {
        Some(Value::String(id)) => Ok(id.clone()),
        None | Some(Value::Null) => Err(AppError::MissingUserId),
        Some(_) => Err(AppError::InvalidUserId),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub service: String,
}

impl HealthCheckResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
