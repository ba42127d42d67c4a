use std::fs;
use std::path::Path;

use crate::query::{FoundWords, WordQuery};
use crate::FinderError;

pub const MAX_WORDS_TO_RETURN: usize = 1000;

const WILDCARD: char = '_';

pub struct WordFinder {
    /// Shortest words first, ties in alphabetical order.
    by_length: Vec<String>,
    alphabetical: Vec<String>,
}

impl WordFinder {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut alphabetical = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect::<Vec<String>>();
        alphabetical.sort_unstable();
        alphabetical.dedup();
        let mut by_length = alphabetical.clone();
        by_length.sort_by(|a, b| a.chars().count().cmp(&b.chars().count()).then(a.cmp(b)));
        Self {
            by_length,
            alphabetical,
        }
    }

    /// Reads a word list with one word per line.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FinderError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| FinderError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let finder = Self::from_words(contents.lines());
        tracing::info!(path = %path.display(), words = finder.len(), "loaded word list");
        Ok(finder)
    }

    pub fn len(&self) -> usize {
        self.alphabetical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alphabetical.is_empty()
    }

    pub fn find_words(&self, query: &WordQuery) -> Result<FoundWords, FinderError> {
        let letters = query.characters.trim().to_uppercase();
        let pattern = query.pattern.trim().to_uppercase();
        if letters.is_empty() && pattern.is_empty() {
            return Err(FinderError::MissingInput);
        }
        let letter_count = letters.chars().count();
        let mut min_length = query.min_word_length;
        if letters.is_empty() || min_length < 1 {
            min_length = 1;
        }

        let mut found = FoundWords::empty(query.index_of_first);
        if !letters.is_empty() && letter_count < min_length {
            return Ok(found);
        }

        let max_to_return = match query.max_to_return {
            0 => MAX_WORDS_TO_RETURN,
            max => max.min(MAX_WORDS_TO_RETURN),
        };

        validate_pattern(&pattern, &letters)?;
        min_length = min_length.max(pattern.chars().count());

        let page_end = query.index_of_first.saturating_add(max_to_return);
        for word in &self.by_length {
            let length = word.chars().count();
            if !letters.is_empty() && length > letter_count {
                // the rest of the list is longer still
                break;
            }
            if length >= min_length
                && word_contained_in_chars(word, &letters)
                && matches_pattern(&pattern, word)
            {
                if (query.index_of_first..page_end).contains(&found.total_matches) {
                    found.found_words.push(word.clone());
                }
                found.total_matches += 1;
            }
        }
        tracing::debug!(
            letters = %letters,
            pattern = %pattern,
            total = found.total_matches,
            returned = found.found_words.len(),
            "word search finished"
        );
        Ok(found)
    }

    pub fn is_word(&self, candidate: &str) -> bool {
        self.alphabetical
            .binary_search(&candidate.to_uppercase())
            .is_ok()
    }

    /// Whether any word begins with `first_letters`. One letter or fewer always succeeds.
    pub fn words_exist_that_start_with(&self, first_letters: &str) -> bool {
        if first_letters.chars().count() <= 1 {
            return true;
        }
        let prefix = first_letters.to_uppercase();
        let start = self
            .alphabetical
            .partition_point(|word| word.as_str() < prefix.as_str());
        self.alphabetical
            .get(start)
            .is_some_and(|word| word.starts_with(&prefix))
    }
}

fn validate_pattern(pattern: &str, letters: &str) -> Result<(), FinderError> {
    if pattern.is_empty() || letters.is_empty() {
        return Ok(());
    }
    if pattern.chars().count() > letters.chars().count() {
        return Err(FinderError::PatternTooLong);
    }
    if let Some(invalid) = pattern
        .chars()
        .find(|&c| c != WILDCARD && !letters.contains(c))
    {
        return Err(FinderError::InvalidPattern(invalid));
    }
    Ok(())
}

fn matches_pattern(pattern: &str, word: &str) -> bool {
    if pattern.is_empty() {
        return true;
    }
    if pattern.chars().count() != word.chars().count() {
        return false;
    }
    pattern
        .chars()
        .zip(word.chars())
        .all(|(p, c)| p == WILDCARD || p == c)
}

/// Whether `word` can be spelled from `chars`, using each character at most as
/// often as it occurs there. Empty `chars` contains everything.
pub fn word_contained_in_chars(word: &str, chars: &str) -> bool {
    if chars.is_empty() {
        return true;
    }
    word.chars().all(|c| {
        word.chars().filter(|&w| w == c).count() <= chars.chars().filter(|&h| h == c).count()
    })
}
