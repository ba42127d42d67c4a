use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::dictionary::DefinitionRecord;
use crate::{status_error, DictionaryError, NotFoundError};

const ENTRIES_PATH: [&str; 4] = ["api", "v2", "entries", "en"];

/// Body the dictionary API sends along with a 404.
#[derive(Debug, Deserialize)]
struct NotFoundBody {
    #[serde(default)]
    title: String,
    #[serde(default)]
    message: String,
}

pub(crate) fn definition_url(base: &Url, word: &str) -> Result<Url, DictionaryError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| DictionaryError::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .extend(ENTRIES_PATH)
        .push(word);
    Ok(url)
}

pub(crate) fn definition_request(
    client: &reqwest::Client,
    base: &Url,
    word: &str,
) -> Result<reqwest::RequestBuilder, DictionaryError> {
    Ok(client.get(definition_url(base, word)?))
}

pub(crate) async fn get_definitions(
    client: &reqwest::Client,
    base: &Url,
    word: &str,
) -> Result<Vec<DefinitionRecord>, DictionaryError> {
    let req = definition_request(client, base, word)?;
    tracing::debug!(word, "requesting definitions");
    let res = req.send().await.map_err(DictionaryError::Fetch)?;
    if res.status() == StatusCode::NOT_FOUND {
        let body = res.json::<NotFoundBody>().await.ok();
        return Err(DictionaryError::NotFound(not_found(word, body)));
    }
    if !res.status().is_success() {
        return Err(status_error(res).await);
    }
    res.json::<Vec<DefinitionRecord>>()
        .await
        .map_err(DictionaryError::Deserialize)
}

fn not_found(word: &str, body: Option<NotFoundBody>) -> NotFoundError {
    let message = match body {
        Some(body) if !body.message.is_empty() => body.message,
        Some(body) if !body.title.is_empty() => body.title,
        _ => "No definitions found".to_owned(),
    };
    NotFoundError {
        word: word.to_owned(),
        message,
    }
}
