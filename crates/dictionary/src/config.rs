use std::env;

use serde::{Deserialize, Serialize};

use crate::dictionary_api::DICTIONARY_API_URL;

fn default_api_url() -> String {
    DICTIONARY_API_URL.to_string()
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Entries endpoint; the language and word are appended as path segments
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Language code of the dictionary to query
    #[serde(default = "default_language")]
    pub language: String,
    /// Whole-request timeout, no timeout when unset
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            language: default_language(),
            timeout_seconds: None,
        }
    }
}

impl DictionaryConfig {
    /// Reads `DICTIONARY_API_URL`, `DICTIONARY_LANGUAGE` and
    /// `DICTIONARY_TIMEOUT_SECONDS`, keeping the default for anything unset
    /// or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("DICTIONARY_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_api_url);

        let language = lookup("DICTIONARY_LANGUAGE")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_language);

        let timeout_seconds = lookup("DICTIONARY_TIMEOUT_SECONDS").and_then(|v| v.trim().parse().ok());

        Self {
            api_url,
            language,
            timeout_seconds,
        }
    }
}
