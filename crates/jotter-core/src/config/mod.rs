//! Host configuration for the client shell

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use crate::util::{is_http_url, normalize_text_option};
use crate::{Error, Result};

pub const API_URL_VAR: &str = "JOTTER_API_URL";
pub const DATA_DIR_VAR: &str = "JOTTER_DATA_DIR";
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

const APP_DIR_NAME: &str = "jotter";

/// Where the data store lives and where the session is persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub data_dir: PathBuf,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = normalize_text_option(lookup(API_URL_VAR))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !is_http_url(&api_url) {
            return Err(Error::Config(format!(
                "{API_URL_VAR} must start with http:// or https://"
            )));
        }
        let api_url = api_url.trim_end_matches('/').to_string();

        let data_dir = normalize_text_option(lookup(DATA_DIR_VAR))
            .map_or_else(default_data_dir, PathBuf::from);

        Ok(Self { api_url, data_dir })
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from("."), |dir| dir.join(APP_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ClientConfig> {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        ClientConfig::from_lookup(|key| map.get(key).map(|value| (*value).to_string()))
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.data_dir, default_data_dir());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[(API_URL_VAR, "   "), (DATA_DIR_VAR, "")]).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.data_dir, default_data_dir());
    }

    #[test]
    fn overrides_are_trimmed() {
        let config = config_from(&[
            (API_URL_VAR, " https://notes.example.com/api/ "),
            (DATA_DIR_VAR, "/tmp/jotter"),
        ])
        .unwrap();
        assert_eq!(config.api_url, "https://notes.example.com/api");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/jotter"));
    }

    #[test]
    fn api_url_requires_scheme() {
        let error = config_from(&[(API_URL_VAR, "localhost:3000")]).unwrap_err();
        assert!(error.to_string().contains(API_URL_VAR));
    }
}
