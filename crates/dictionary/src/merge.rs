use thiserror::Error;

use crate::dictionary::{DefinitionRecord, MergedDefinition, Meaning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("at least one definition record is required to build a merged definition")]
pub struct EmptyInputError;

/// Folds the records returned for one word into a single definition.
///
/// The word and phonetic come from the first record. Meanings are keyed by
/// their exact part of speech and keep the order in which each part of
/// speech was first seen; later definitions for the same part of speech are
/// appended in input order.
pub fn merge(records: &[DefinitionRecord]) -> Result<MergedDefinition, EmptyInputError> {
    let first = records.first().ok_or(EmptyInputError)?;
    let mut merged = MergedDefinition {
        word: first.word.clone(),
        phonetic: first.phonetic.clone(),
        meanings: Vec::new(),
    };
    for record in records {
        for meaning in &record.meanings {
            match merged
                .meanings
                .iter_mut()
                .find(|existing| existing.part_of_speech == meaning.part_of_speech)
            {
                Some(existing) => existing
                    .definitions
                    .extend(meaning.definitions.iter().cloned()),
                None => merged.meanings.push(Meaning {
                    part_of_speech: meaning.part_of_speech.clone(),
                    definitions: meaning.definitions.clone(),
                }),
            }
        }
    }
    tracing::debug!(
        word = %merged.word,
        records = records.len(),
        meanings = merged.meanings.len(),
        "merged definition records"
    );
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DefinitionEntry;

    fn entry(text: &str) -> DefinitionEntry {
        DefinitionEntry {
            definition: text.to_owned(),
            example: None,
            synonyms: Vec::new(),
            antonyms: Vec::new(),
        }
    }

    fn meaning(part_of_speech: &str, definitions: &[&str]) -> Meaning {
        Meaning {
            part_of_speech: part_of_speech.to_owned(),
            definitions: definitions.iter().map(|text| entry(text)).collect(),
        }
    }

    fn record(meanings: Vec<Meaning>) -> DefinitionRecord {
        DefinitionRecord {
            word: "w".to_owned(),
            phonetic: "p".to_owned(),
            meanings,
        }
    }

    #[test]
    fn single_record_is_copied() {
        let input = DefinitionRecord {
            word: "bank".to_owned(),
            phonetic: "/bæŋk/".to_owned(),
            meanings: vec![meaning("noun", &["d1"])],
        };
        let merged = merge(std::slice::from_ref(&input)).unwrap();
        assert_eq!(merged.word, "bank");
        assert_eq!(merged.phonetic, "/bæŋk/");
        assert_eq!(merged.meanings, vec![meaning("noun", &["d1"])]);
    }

    #[test]
    fn same_part_of_speech_is_merged_in_order() {
        let input = [
            record(vec![meaning("noun", &["d1"])]),
            record(vec![meaning("noun", &["d2"])]),
        ];
        let merged = merge(&input).unwrap();
        assert_eq!(merged.meanings, vec![meaning("noun", &["d1", "d2"])]);
    }

    #[test]
    fn first_seen_order_is_kept() {
        let input = [
            record(vec![meaning("verb", &["v1"]), meaning("noun", &["n1"])]),
            record(vec![meaning("noun", &["n2"]), meaning("adjective", &["a1"])]),
            record(vec![meaning("verb", &["v2"])]),
        ];
        let merged = merge(&input).unwrap();
        let order: Vec<&str> = merged
            .meanings
            .iter()
            .map(|meaning| meaning.part_of_speech.as_str())
            .collect();
        assert_eq!(order, ["verb", "noun", "adjective"]);
        assert_eq!(merged.meaning("verb"), Some(&meaning("verb", &["v1", "v2"])));
        assert_eq!(merged.meaning("noun"), Some(&meaning("noun", &["n1", "n2"])));
    }

    #[test]
    fn part_of_speech_match_is_case_sensitive() {
        let input = [
            record(vec![meaning("noun", &["n1"])]),
            record(vec![meaning("Noun", &["n2"])]),
        ];
        let merged = merge(&input).unwrap();
        assert_eq!(merged.meanings.len(), 2);
    }

    #[test]
    fn inputs_are_left_untouched() {
        let input = vec![
            record(vec![meaning("noun", &["d1"])]),
            record(vec![meaning("noun", &["d2", "d3"])]),
        ];
        let before = input.clone();
        let mut merged = merge(&input).unwrap();
        merged.meanings[0].definitions.clear();
        assert_eq!(input, before);
    }

    #[test]
    fn empty_meanings_contribute_nothing() {
        let input = [record(Vec::new()), record(vec![meaning("noun", &["d1"])])];
        let merged = merge(&input).unwrap();
        assert_eq!(merged.meanings, vec![meaning("noun", &["d1"])]);

        let merged = merge(&[record(Vec::new())]).unwrap();
        assert!(merged.meanings.is_empty());
        assert_eq!(merged.word, "w");
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(merge(&[]), Err(EmptyInputError));
    }

    #[test]
    fn word_and_phonetic_come_from_first_record() {
        let mut second = record(vec![meaning("noun", &["d2"])]);
        second.word = "other".to_owned();
        second.phonetic = "other-p".to_owned();
        let merged = merge(&[record(Vec::new()), second]).unwrap();
        assert_eq!(merged.word, "w");
        assert_eq!(merged.phonetic, "p");
    }
}
