use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const DICTIONARY_URL_VAR: &str = "DICTIONARY_API_URL";
pub const BACKEND_URL_VAR: &str = "WORDFINDER_BASE_URL";
pub const TIMEOUT_VAR: &str = "REQUEST_TIMEOUT_SECS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL in {key} '{value}': {reason}")]
    InvalidUrl {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("invalid timeout in {key} '{value}', expected a whole number of seconds")]
    InvalidTimeout { key: &'static str, value: String },
}

/// Where the two services live and how long to wait for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryConfig {
    pub dictionary_url: Url,
    /// Base of the word-search backend; `/findwords` is appended to it.
    pub backend_url: Url,
    pub timeout: Duration,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            dictionary_url: Url::parse(DEFAULT_DICTIONARY_URL)
                .expect("default dictionary URL is valid"),
            backend_url: Url::parse(DEFAULT_BACKEND_URL).expect("default backend URL is valid"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl DictionaryConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`, keeping defaults for anything it doesn't return.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(DICTIONARY_URL_VAR) {
            config.dictionary_url = parse_url(DICTIONARY_URL_VAR, &value)?;
        }
        if let Some(value) = lookup(BACKEND_URL_VAR) {
            config.backend_url = parse_url(BACKEND_URL_VAR, &value)?;
        }
        if let Some(value) = lookup(TIMEOUT_VAR) {
            config.timeout = parse_timeout(TIMEOUT_VAR, &value)?;
        }
        Ok(config)
    }

    pub fn with_dictionary_url(mut self, value: &str) -> Result<Self, ConfigError> {
        self.dictionary_url = parse_url("dictionary URL", value)?;
        Ok(self)
    }

    pub fn with_backend_url(mut self, value: &str) -> Result<Self, ConfigError> {
        self.backend_url = parse_url("backend URL", value)?;
        Ok(self)
    }
}

fn parse_url(key: &'static str, value: &str) -> Result<Url, ConfigError> {
    let value = value.trim();
    let url = Url::parse(value).map_err(|error| ConfigError::InvalidUrl {
        key,
        value: value.to_owned(),
        reason: error.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl {
            key,
            value: value.to_owned(),
            reason: "URL cannot be used as a base".to_owned(),
        });
    }
    Ok(url)
}

fn parse_timeout(key: &'static str, value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            key,
            value: value.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = DictionaryConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DictionaryConfig::default());
        assert_eq!(config.dictionary_url.as_str(), "https://api.dictionaryapi.dev/");
        assert_eq!(config.backend_url.as_str(), "http://localhost:5000/");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn variables_override_defaults() {
        let config = DictionaryConfig::from_lookup(lookup(&[
            (BACKEND_URL_VAR, "https://words.example.com/app/"),
            (TIMEOUT_VAR, " 3 "),
        ]))
        .unwrap();
        assert_eq!(config.backend_url.as_str(), "https://words.example.com/app/");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.dictionary_url.as_str(), "https://api.dictionaryapi.dev/");
    }

    #[test]
    fn rejects_relative_url() {
        let err = DictionaryConfig::from_lookup(lookup(&[(BACKEND_URL_VAR, ".")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { key: BACKEND_URL_VAR, .. }));
    }

    #[test]
    fn rejects_bad_timeout() {
        for value in ["0", "soon", "-1"] {
            let err = DictionaryConfig::from_lookup(lookup(&[(TIMEOUT_VAR, value)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
        }
    }

    #[test]
    fn builder_overrides() {
        let config = DictionaryConfig::default()
            .with_dictionary_url("http://127.0.0.1:9000")
            .unwrap();
        assert_eq!(config.dictionary_url.as_str(), "http://127.0.0.1:9000/");
        assert!(DictionaryConfig::default()
            .with_backend_url("data:text/plain,hi")
            .is_err());
    }
}
