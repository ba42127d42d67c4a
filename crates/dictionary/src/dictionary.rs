use serde::{Deserialize, Deserializer, Serialize};

/// One entry returned by the dictionary API for a word.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DefinitionRecord {
    pub word: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phonetic: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub definitions: Vec<DefinitionEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionEntry {
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub synonyms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub antonyms: Vec<String>,
}

/// The API sends `null` for some fields it has nothing for; treat it like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Every record for a word folded into one, with a single meaning per part of speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedDefinition {
    pub word: String,
    pub phonetic: String,
    pub meanings: Vec<Meaning>,
}

impl MergedDefinition {
    pub fn meaning(&self, part_of_speech: &str) -> Option<&Meaning> {
        self.meanings
            .iter()
            .find(|meaning| meaning.part_of_speech == part_of_speech)
    }

    pub fn definition_count(&self) -> usize {
        self.meanings
            .iter()
            .map(|meaning| meaning.definitions.len())
            .sum()
    }
}
