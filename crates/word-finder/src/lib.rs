use std::path::PathBuf;

use thiserror::Error;

mod finder;
mod query;

pub use finder::{word_contained_in_chars, WordFinder, MAX_WORDS_TO_RETURN};
pub use query::{FoundWords, WordQuery, DEFAULT_MIN_WORD_LENGTH, DEFAULT_PAGE_SIZE};

#[derive(Debug, Error)]
pub enum FinderError {
    #[error("must provide letters or a pattern")]
    MissingInput,
    #[error("pattern is longer than the number of characters")]
    PatternTooLong,
    #[error("invalid pattern character '{0}', must contain only underscores or letters from the input string")]
    InvalidPattern(char),
    #[error("failed to load word list {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
