//! Data-access layer over a generic REST resource API.
//!
//! Four verbs against json-server style collections. Records travel as plain
//! JSON; typed decoding happens in the access layers above.

mod memory;
mod rest;

use std::fmt;
use std::future::Future;

use serde_json::Value;
use thiserror::Error;

use crate::models::RecordId;

pub use memory::MemoryDataStore;
pub use rest::RestClient;

/// Collections exposed by the data store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Users,
    Notes,
}

impl Resource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Notes => "notes",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Request failed ({status}): {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid data store configuration: {0}")]
    InvalidConfiguration(&'static str),
}

impl ApiError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Equality filters sent as query parameters (`?authorId=1&id=7`)
pub type Query<'a> = [(&'a str, String)];

/// The four verbs of the external data store.
pub trait DataStore: Clone + Send + Sync + 'static {
    /// All records of `resource` whose fields equal every query parameter
    fn fetch_all(
        &self,
        resource: Resource,
        query: &Query<'_>,
    ) -> impl Future<Output = ApiResult<Vec<Value>>> + Send;

    /// Insert `body`; the store assigns the id and returns the stored record
    fn create(
        &self,
        resource: Resource,
        body: Value,
    ) -> impl Future<Output = ApiResult<Value>> + Send;

    /// Replace the whole record `id` with `body`
    fn replace(
        &self,
        resource: Resource,
        id: &RecordId,
        body: Value,
    ) -> impl Future<Output = ApiResult<Value>> + Send;

    fn delete(&self, resource: Resource, id: &RecordId)
        -> impl Future<Output = ApiResult<()>> + Send;
}

/// Decode a record returned by the data store
pub(crate) fn decode<T: serde::de::DeserializeOwned>(value: Value) -> ApiResult<T> {
    Ok(serde_json::from_value(value)?)
}

/// Encode a payload for the data store
pub(crate) fn encode<T: serde::Serialize>(payload: &T) -> ApiResult<Value> {
    Ok(serde_json::to_value(payload)?)
}
