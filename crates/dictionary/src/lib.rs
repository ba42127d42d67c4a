use reqwest::StatusCode;
use thiserror::Error;

mod config;
mod dictionary;
mod dictionary_api;
mod merge;
mod word_search;

pub use config::{
    ConfigError, DictionaryConfig, BACKEND_URL_VAR, DEFAULT_BACKEND_URL, DEFAULT_DICTIONARY_URL,
    DEFAULT_TIMEOUT, DICTIONARY_URL_VAR, TIMEOUT_VAR,
};
pub use dictionary::{DefinitionEntry, DefinitionRecord, Meaning, MergedDefinition};
pub use merge::{merge, EmptyInputError};
pub use word_finder::{FoundWords, WordQuery};

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("request failed: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("failed to decode response: {0}")]
    Deserialize(#[source] reqwest::Error),
    #[error(transparent)]
    NotFound(NotFoundError),
    #[error(transparent)]
    Empty(#[from] EmptyInputError),
    #[error("'{0}' cannot be used as a base URL")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{word}' not found: {message}")]
pub struct NotFoundError {
    pub word: String,
    pub message: String,
}

/// Turns a non-success response into `Status`, keeping whatever the server said.
pub(crate) async fn status_error(res: reqwest::Response) -> DictionaryError {
    let status = res.status();
    let body = res.text().await.unwrap_or_default();
    tracing::warn!(%status, body = %body, "request was not successful");
    DictionaryError::Status {
        status,
        body: body.trim().to_owned(),
    }
}

pub struct Dictionary {
    client: reqwest::Client,
    config: DictionaryConfig,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_config(DictionaryConfig::default())
    }

    pub fn with_config(config: DictionaryConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(config.timeout)
                .build()
                .unwrap_or_else(|error| {
                    tracing::warn!(%error, "falling back to a client without timeout");
                    reqwest::Client::new()
                }),
            config,
        }
    }

    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    /// Every record the dictionary holds for `word`, unmerged.
    pub async fn get_definitions(&self, word: &str) -> Result<Vec<DefinitionRecord>, DictionaryError> {
        dictionary_api::get_definitions(&self.client, &self.config.dictionary_url, word).await
    }

    pub async fn get_definition(&self, word: &str) -> Result<MergedDefinition, DictionaryError> {
        let records = self.get_definitions(word).await?;
        Ok(merge(&records)?)
    }

    pub async fn find_words(&self, query: &WordQuery) -> Result<FoundWords, DictionaryError> {
        word_search::find_words(&self.client, &self.config.backend_url, query).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
