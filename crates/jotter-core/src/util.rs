//! Small helpers for config values, store URLs and error bodies.

/// Trimmed text, or `None` when the value is unset or blank
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Whether a data store URL uses a scheme reqwest can reach
pub fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Trim a response body to at most 180 characters for an error message.
pub fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}

/// Current Unix timestamp in milliseconds, as stored in `createdAt`.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
