use std::path::PathBuf;

use clap::Parser;
use dictionary::{Dictionary, DictionaryConfig, DictionaryError, MergedDefinition};
use tracing_subscriber::EnvFilter;
use utilities::{closest_command, input, str_to_bool};
use word_finder::{FoundWords, WordFinder, WordQuery, DEFAULT_PAGE_SIZE};

mod utilities;

const COMMANDS: [&str; 10] = [
    "define", "def", "d", "find", "search", "f", "more", "next", "exit", "quit",
];

/// Look up word definitions and find words that can be made from a set of letters
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Dictionary API base URL
    #[arg(long)]
    dictionary_url: Option<String>,

    /// Word-search backend base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Search a local word list (one word per line) instead of the backend
    #[arg(long)]
    words: Option<PathBuf>,

    /// Number of words shown per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,
}

/// Where word searches are answered.
enum Finder {
    Remote,
    Local(WordFinder),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    // CLI flags > env vars > defaults
    let mut config = DictionaryConfig::from_env()?;
    if let Some(url) = &args.dictionary_url {
        config = config.with_dictionary_url(url)?;
    }
    if let Some(url) = &args.base_url {
        config = config.with_backend_url(url)?;
    }
    if let Some(secs) = args.timeout {
        config.timeout = std::time::Duration::from_secs(secs);
    }
    let finder = match &args.words {
        Some(path) => Finder::Local(WordFinder::load(path)?),
        None => Finder::Remote,
    };
    tracing::debug!(?config, local = args.words.is_some(), "starting");

    let dict = Dictionary::with_config(config);
    let mut last_search: Option<(WordQuery, FoundWords)> = None;
    loop {
        let line = input(">> ")?;
        if line.is_empty() {
            // stdin closed
            break;
        }
        let line = line.trim();
        let mut command_parts = line.split_ascii_whitespace();
        if let Some(command) = command_parts.next() {
            match command {
                "exit" | "leave" | "quit" | "e" | "q" | "l" => {
                    break;
                }
                "define" | "def" | "d" => {
                    define_word(&dict, &command_parts.collect::<Vec<&str>>().join(" ")).await;
                }
                "find" | "search" | "f" => {
                    let characters = command_parts.next().unwrap_or_default();
                    let pattern = command_parts.next().unwrap_or_default();
                    let query = WordQuery::new(characters, pattern).page(0, args.page_size);
                    last_search = search(&dict, &finder, query).await;
                }
                "more" | "next" => match &last_search {
                    Some((query, found)) => match query.next_page(found) {
                        Some(query) => last_search = search(&dict, &finder, query).await,
                        None => println!("No more words."),
                    },
                    None => println!("Search for words first with `find <letters> [pattern]`."),
                },
                other => match closest_command(other, &COMMANDS) {
                    Some(suggestion) => {
                        println!("Unknown command {other}. Did you mean `{suggestion}`?")
                    }
                    None => println!("Unknown command {other}."),
                },
            }
        }
    }
    Ok(())
}

async fn define_word(dict: &Dictionary, word: &str) {
    if word.is_empty() {
        println!("Usage: define <word>");
        return;
    }
    match dict.get_definition(word).await {
        Ok(definition) => print_definition(&definition),
        Err(DictionaryError::NotFound(_) | DictionaryError::Empty(_)) => {
            println!("Couldn't find the word you were looking for.")
        }
        Err(error) => {
            println!("Encountered an error while searching for the word definition: {error}");
        }
    }
}

/// Runs `query` and keeps paging while the user asks for more.
async fn search(
    dict: &Dictionary,
    finder: &Finder,
    mut query: WordQuery,
) -> Option<(WordQuery, FoundWords)> {
    let mut last = None;
    loop {
        let result = match finder {
            Finder::Remote => dict.find_words(&query).await.map_err(anyhow::Error::from),
            Finder::Local(finder) => finder.find_words(&query).map_err(anyhow::Error::from),
        };
        let found = match result {
            Ok(found) => found,
            Err(error) => {
                println!("Word search failed: {error}");
                return last;
            }
        };
        print_found_words(&found);
        let next = query.next_page(&found);
        last = Some((query, found));
        let Some(next) = next else {
            return last;
        };
        let answer = match input("Show more? (Y/n): ") {
            Ok(answer) => answer,
            Err(_) => return last,
        };
        if !str_to_bool(answer).unwrap_or(false) {
            return last;
        }
        query = next;
    }
}

fn print_found_words(found: &FoundWords) {
    if found.total_matches == 0 {
        println!("No words found.");
        return;
    }
    let first = found.index_of_first + 1;
    let last = found.index_of_first + found.found_words.len();
    println!("Showing {first}-{last} of {} words:", found.total_matches);
    for chunk in found.found_words.chunks(8) {
        println!("    {}", chunk.join("  "));
    }
}

fn print_definition(definition: &MergedDefinition) {
    if definition.phonetic.is_empty() {
        println!("Showing definition for '{}':", definition.word);
    } else {
        println!(
            "Showing definition for '{}' {}:",
            definition.word, definition.phonetic
        );
    }
    for meaning in &definition.meanings {
        println!("    {}:", meaning.part_of_speech);
        for entry in &meaning.definitions {
            println!("        {}", entry.definition);
            if let Some(example) = &entry.example {
                println!("          example: {example}");
            }
            if !entry.synonyms.is_empty() {
                println!("          synonyms: {}", entry.synonyms.join(", "));
            }
            if !entry.antonyms.is_empty() {
                println!("          antonyms: {}", entry.antonyms.join(", "));
            }
        }
    }
}
