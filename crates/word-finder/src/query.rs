use serde::{Deserialize, Serialize};

/// Minimum word length the front-end always asks for.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// A page request for words buildable from `characters` and matching `pattern`.
///
/// Serializes to the `/findwords` query string, so field order matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordQuery {
    pub characters: String,
    /// Letters and `_` wildcards; empty matches any word.
    pub pattern: String,
    #[serde(rename = "minNumChars")]
    pub min_word_length: usize,
    #[serde(rename = "indexOfFirst")]
    pub index_of_first: usize,
    #[serde(rename = "maxToReturn")]
    pub max_to_return: usize,
}

impl WordQuery {
    pub fn new(characters: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            characters: characters.into(),
            pattern: pattern.into(),
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            index_of_first: 0,
            max_to_return: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn page(mut self, index_of_first: usize, max_to_return: usize) -> Self {
        self.index_of_first = index_of_first;
        self.max_to_return = max_to_return;
        self
    }

    /// The same search, starting where `found` left off.
    pub fn next_page(&self, found: &FoundWords) -> Option<Self> {
        let next = found.index_of_first + found.found_words.len();
        if found.found_words.is_empty() || next >= found.total_matches {
            return None;
        }
        Some(self.clone().page(next, self.max_to_return))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundWords {
    pub found_words: Vec<String>,
    /// Every match, including those outside the returned page.
    pub total_matches: usize,
    pub index_of_first: usize,
}

impl FoundWords {
    pub fn empty(index_of_first: usize) -> Self {
        Self {
            found_words: Vec::new(),
            total_matches: 0,
            index_of_first,
        }
    }
}
