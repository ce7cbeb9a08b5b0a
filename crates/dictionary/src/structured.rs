use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dictionary::{Entry, Phonetic};
use crate::region::region_code_from_audio_url;

/// Machine-readable view of the first entry of a lookup, for callers that
/// render their own UI instead of using the text report.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredEntry {
    pub pronunciations: Vec<Pronunciation>,
    pub explanations: Vec<Explanation>,
    /// Synonyms of every meaning
    pub associations: Vec<String>,
    /// Usage examples
    pub sentence: Vec<Sentence>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pronunciation {
    /// Raw two-letter code from the audio file name, e.g. `us`
    pub region: String,
    pub symbol: String,
    pub audio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    #[serde(rename = "trait")]
    pub part_of_speech: String,
    pub explains: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub source: String,
    pub target: String,
}

/// Builds the structured view from a raw API response.
///
/// Returns `None` unless the response is a non-empty array whose first element
/// is an object.
pub fn structured_entry(response: &Value) -> Option<StructuredEntry> {
    let first = response.as_array()?.first()?;
    if !first.is_object() {
        return None;
    }
    let entry = Entry::deserialize(first).ok()?;
    Some(StructuredEntry::from(&entry))
}

impl From<&Entry> for StructuredEntry {
    fn from(entry: &Entry) -> Self {
        let mut structured = StructuredEntry {
            pronunciations: entry.phonetics.iter().filter_map(pronunciation).collect(),
            ..Default::default()
        };
        for meaning in &entry.meanings {
            structured.explanations.push(Explanation {
                part_of_speech: meaning.part_of_speech.clone(),
                explains: meaning
                    .definitions
                    .iter()
                    .map(|definition| definition.definition.clone())
                    .collect(),
            });
            structured.sentence.extend(meaning.definitions.iter().filter_map(|definition| {
                Some(Sentence {
                    source: definition.example()?.to_owned(),
                    target: String::new(),
                })
            }));
        }
        structured.associations = entry.all_synonyms().map(str::to_owned).collect();
        structured
    }
}

fn pronunciation(phonetic: &Phonetic) -> Option<Pronunciation> {
    let audio = phonetic.audio()?;
    Some(Pronunciation {
        region: region_code_from_audio_url(audio).unwrap_or_default().to_owned(),
        symbol: phonetic.text().unwrap_or_default().to_owned(),
        audio: audio.to_owned(),
    })
}
