//! reqwest-backed client for a json-server style REST API.

use std::time::Duration;

use reqwest::{header, Client, RequestBuilder, Response};
use serde_json::Value;

use super::{ApiError, ApiResult, DataStore, Query, Resource};
use crate::models::RecordId;
use crate::util::{compact_text, is_http_url};

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: String,
    client: Client,
}

impl RestClient {
    pub fn new(base_url: impl AsRef<str>) -> ApiResult<Self> {
        let base_url = base_url.as_ref().trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ApiError::InvalidConfiguration("API URL must not be empty"));
        }
        if !is_http_url(base_url) {
            return Err(ApiError::InvalidConfiguration(
                "API URL must include http:// or https://",
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, resource: Resource) -> String {
        format!("{}/{}", self.base_url, resource)
    }

    fn record_url(&self, resource: Resource, id: &RecordId) -> String {
        format!("{}/{}/{}", self.base_url, resource, id)
    }

    async fn send(request: RequestBuilder) -> ApiResult<Response> {
        let response = request
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status,
            body: compact_text(&body),
        })
    }
}

impl DataStore for RestClient {
    async fn fetch_all(&self, resource: Resource, query: &Query<'_>) -> ApiResult<Vec<Value>> {
        tracing::debug!("GET /{} {:?}", resource, query);
        let request = self.client.get(self.collection_url(resource)).query(query);
        Ok(Self::send(request).await?.json().await?)
    }

    async fn create(&self, resource: Resource, body: Value) -> ApiResult<Value> {
        tracing::debug!("POST /{}", resource);
        let request = self.client.post(self.collection_url(resource)).json(&body);
        Ok(Self::send(request).await?.json().await?)
    }

    async fn replace(&self, resource: Resource, id: &RecordId, body: Value) -> ApiResult<Value> {
        tracing::debug!("PUT /{}/{}", resource, id);
        let request = self.client.put(self.record_url(resource, id)).json(&body);
        Ok(Self::send(request).await?.json().await?)
    }

    async fn delete(&self, resource: Resource, id: &RecordId) -> ApiResult<()> {
        tracing::debug!("DELETE /{}/{}", resource, id);
        let request = self.client.delete(self.record_url(resource, id));
        Self::send(request).await?;
        Ok(())
    }
}
