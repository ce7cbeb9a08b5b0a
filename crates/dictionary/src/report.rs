use std::collections::{HashMap, HashSet};
use std::fmt::Write;

use serde_json::Value;

use crate::dictionary::{parse_entries, Entry, Meaning};
use crate::region::region_from_audio_url;

pub const NO_ENTRIES: &str = "No entries found.";

const INDENT: &str = "   ";

/// Renders an API response as a plain text report.
///
/// Anything that isn't a non-empty array of entries renders as
/// [`NO_ENTRIES`]. Missing fields only drop their own lines.
pub fn format_report(response: &Value) -> String {
    match parse_entries(response) {
        Some(entries) => format_entries(&entries),
        None => NO_ENTRIES.to_owned(),
    }
}

/// Renders already decoded entries; the first entry's word is the title.
pub fn format_entries(entries: &[Entry]) -> String {
    let Some(first) = entries.first() else {
        return NO_ENTRIES.to_owned();
    };
    let mut report = format!("{}\n\n", first.word);

    let pronunciations = collect_pronunciations(entries);
    if !pronunciations.is_empty() {
        report.push_str("Pronunciations:\n");
        for pronunciation in &pronunciations {
            let _ = writeln!(report, "{INDENT}{pronunciation}");
        }
        report.push('\n');
    }

    let mut counters: HashMap<String, usize> = HashMap::new();
    for meaning in entries.iter().flat_map(|entry| &entry.meanings) {
        let label = capitalize(&meaning.part_of_speech);
        let counter = counters.entry(label.clone()).or_default();
        *counter += 1;
        let _ = writeln!(report, "{counter}. {label}");
        write_meaning(&mut report, meaning);
        report.push('\n');
    }

    tracing::trace!(
        entries = entries.len(),
        pronunciations = pronunciations.len(),
        "formatted report"
    );
    report.trim().to_owned()
}

/// Unique pronunciation lines in the order they are first seen.
fn collect_pronunciations(entries: &[Entry]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut lines = Vec::new();
    for entry in entries {
        for phonetic in &entry.phonetics {
            let Some(text) = phonetic.text() else {
                continue;
            };
            let region = phonetic
                .audio()
                .and_then(|audio| region_from_audio_url(audio, &entry.word));
            let line = match region {
                Some(region) => format!("{text} ({region})"),
                None => text.to_owned(),
            };
            if seen.insert(line.clone()) {
                lines.push(line);
            }
        }
    }
    lines
}

fn write_meaning(report: &mut String, meaning: &Meaning) {
    for (index, definition) in meaning.definitions.iter().enumerate() {
        let _ = writeln!(report, "{INDENT}{}. {}", index + 1, definition.definition);
        if let Some(example) = definition.example() {
            let _ = writeln!(report, "{INDENT}{INDENT}Example: \"{example}\"");
        }
    }
    if !meaning.synonyms.is_empty() {
        let _ = writeln!(report, "{INDENT}Synonyms: {}", meaning.synonyms.join(", "));
    }
    if !meaning.antonyms.is_empty() {
        let _ = writeln!(report, "{INDENT}Antonyms: {}", meaning.antonyms.join(", "));
    }
}

/// Uppercases the first character only: `"phrasal verb"` -> `"Phrasal verb"`.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
