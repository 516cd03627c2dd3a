//! In-process data store with json-server semantics, used by tests and demos.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;

use super::{ApiError, ApiResult, DataStore, Query, Resource};
use crate::models::RecordId;

#[derive(Debug, Default)]
struct Inner {
    tables: Mutex<HashMap<Resource, Vec<Value>>>,
    requests: AtomicUsize,
    offline: AtomicBool,
}

/// Shared in-memory collections. Clones see the same records.
#[derive(Debug, Clone, Default)]
pub struct MemoryDataStore {
    inner: Arc<Inner>,
}

impl MemoryDataStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record directly, bypassing the request counter
    pub fn seed(&self, resource: Resource, record: Value) {
        self.tables()
            .entry(resource)
            .or_default()
            .push(with_id(record, None));
    }

    /// Snapshot of every record in `resource`
    #[must_use]
    pub fn records(&self, resource: Resource) -> Vec<Value> {
        self.tables().get(&resource).cloned().unwrap_or_default()
    }

    /// Number of verbs served so far, failed ones included
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.inner.requests.load(Ordering::SeqCst)
    }

    /// Make every subsequent request fail as if the network were down
    pub fn set_offline(&self, offline: bool) {
        self.inner.offline.store(offline, Ordering::SeqCst);
    }

    fn tables(&self) -> std::sync::MutexGuard<'_, HashMap<Resource, Vec<Value>>> {
        self.inner
            .tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self) -> ApiResult<()> {
        self.inner.requests.fetch_add(1, Ordering::SeqCst);
        if self.inner.offline.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: 503,
                body: "data store unavailable".to_string(),
            });
        }
        Ok(())
    }
}

impl DataStore for MemoryDataStore {
    async fn fetch_all(&self, resource: Resource, query: &Query<'_>) -> ApiResult<Vec<Value>> {
        self.begin()?;
        let tables = self.tables();
        let records = tables.get(&resource).map_or_else(Vec::new, |records| {
            records
                .iter()
                .filter(|record| matches_query(record, query))
                .cloned()
                .collect()
        });
        Ok(records)
    }

    async fn create(&self, resource: Resource, body: Value) -> ApiResult<Value> {
        self.begin()?;
        if !body.is_object() {
            return Err(bad_request("body must be a JSON object"));
        }
        let record = with_id(body, None);
        self.tables()
            .entry(resource)
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn replace(&self, resource: Resource, id: &RecordId, body: Value) -> ApiResult<Value> {
        self.begin()?;
        if !body.is_object() {
            return Err(bad_request("body must be a JSON object"));
        }
        let mut tables = self.tables();
        let records = tables.entry(resource).or_default();
        let slot = records
            .iter_mut()
            .find(|record| has_id(record, id))
            .ok_or_else(not_found)?;
        let existing_id = slot.get("id").cloned();
        *slot = with_id(body, existing_id);
        Ok(slot.clone())
    }

    async fn delete(&self, resource: Resource, id: &RecordId) -> ApiResult<()> {
        self.begin()?;
        let mut tables = self.tables();
        let records = tables.entry(resource).or_default();
        let index = records
            .iter()
            .position(|record| has_id(record, id))
            .ok_or_else(not_found)?;
        records.remove(index);
        Ok(())
    }
}

/// Query values arrive as strings, so compare against the field's text form.
fn field_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn matches_query(record: &Value, query: &Query<'_>) -> bool {
    query.iter().all(|(field, expected)| {
        record
            .get(*field)
            .is_some_and(|value| field_text(value) == *expected)
    })
}

fn has_id(record: &Value, id: &RecordId) -> bool {
    record
        .get("id")
        .is_some_and(|value| field_text(value) == id.to_string())
}

/// Set `id` to `forced`, or keep the body's own id, or generate one.
fn with_id(mut record: Value, forced: Option<Value>) -> Value {
    if let Value::Object(fields) = &mut record {
        match forced {
            Some(id) => {
                fields.insert("id".to_string(), id);
            }
            None => {
                if fields.get("id").is_none_or(Value::is_null) {
                    let id = RecordId::generate().to_string();
                    fields.insert("id".to_string(), Value::String(id));
                }
            }
        }
    }
    record
}

fn not_found() -> ApiError {
    ApiError::Status {
        status: 404,
        body: "{}".to_string(),
    }
}

fn bad_request(message: &str) -> ApiError {
    ApiError::Status {
        status: 400,
        body: message.to_string(),
    }
}
