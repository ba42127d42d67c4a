use reqwest::Url;
use word_finder::{FoundWords, WordQuery};

use crate::{status_error, DictionaryError};

const FIND_WORDS_PATH: &str = "findwords";

pub(crate) fn search_request(
    client: &reqwest::Client,
    base: &Url,
    query: &WordQuery,
) -> Result<reqwest::RequestBuilder, DictionaryError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| DictionaryError::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .push(FIND_WORDS_PATH);
    Ok(client.get(url).query(query))
}

pub(crate) async fn find_words(
    client: &reqwest::Client,
    base: &Url,
    query: &WordQuery,
) -> Result<FoundWords, DictionaryError> {
    let req = search_request(client, base, query)?;
    tracing::debug!(
        characters = %query.characters,
        pattern = %query.pattern,
        index_of_first = query.index_of_first,
        "requesting word search"
    );
    let res = req.send().await.map_err(DictionaryError::Fetch)?;
    if !res.status().is_success() {
        return Err(status_error(res).await);
    }
    res.json::<FoundWords>()
        .await
        .map_err(DictionaryError::Deserialize)
}
