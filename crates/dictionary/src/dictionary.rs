use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// One result object returned by the dictionary API.
///
/// Every field decodes leniently: a missing field, `null`, or a value of the
/// wrong JSON type becomes the empty default instead of failing the entry.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Entry {
    #[serde(deserialize_with = "lenient")]
    pub word: String,
    #[serde(deserialize_with = "lenient")]
    pub phonetic: Option<String>,
    #[serde(deserialize_with = "lenient_seq")]
    pub phonetics: Vec<Phonetic>,
    #[serde(deserialize_with = "lenient")]
    pub origin: Option<String>,
    #[serde(deserialize_with = "lenient_seq")]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Phonetic {
    #[serde(deserialize_with = "lenient")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub audio: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meaning {
    #[serde(deserialize_with = "lenient")]
    pub part_of_speech: String,
    #[serde(deserialize_with = "lenient_seq")]
    pub definitions: Vec<Definition>,
    #[serde(deserialize_with = "lenient")]
    pub synonyms: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Definition {
    #[serde(deserialize_with = "lenient")]
    pub definition: String,
    #[serde(deserialize_with = "lenient")]
    pub example: Option<String>,
}

impl Entry {
    /// Synonyms of every meaning, in order.
    pub fn all_synonyms(&self) -> impl Iterator<Item = &str> {
        self.meanings
            .iter()
            .flat_map(|meaning| meaning.synonyms.iter().map(|synonym| &synonym[..]))
    }
}

impl Phonetic {
    /// Pronunciation spelling, if present and non-empty.
    pub fn text(&self) -> Option<&str> {
        non_empty(&self.text)
    }

    /// Audio file URL, if present and non-empty.
    pub fn audio(&self) -> Option<&str> {
        non_empty(&self.audio)
    }
}

impl Definition {
    pub fn example(&self) -> Option<&str> {
        non_empty(&self.example)
    }
}

/// Decodes an API response into entries.
///
/// Returns `None` when the response is not an array or holds no entries, which
/// is what the API sends back for unknown words. Elements that are not objects
/// decode to an empty [`Entry`].
pub fn parse_entries(response: &Value) -> Option<Vec<Entry>> {
    let items = response.as_array()?;
    if items.is_empty() {
        return None;
    }
    Some(
        items
            .iter()
            .map(|item| Entry::deserialize(item).unwrap_or_default())
            .collect(),
    )
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .map(|item| T::deserialize(item).unwrap_or_default())
        .collect())
}
