use std::time::Duration;

use dictionary_api::{fetch_entries, DICTIONARY_API_URL};
use reqwest::Url;
use serde_json::Value;

mod config;
mod dictionary;
mod dictionary_api;
mod region;
mod report;
mod structured;

pub use config::DictionaryConfig;
pub use dictionary::{parse_entries, Definition, Entry, Meaning, Phonetic};
pub use region::{region_code_from_audio_url, region_from_audio_url, region_name};
pub use report::{format_entries, format_report, NO_ENTRIES};
pub use structured::{structured_entry, Explanation, Pronunciation, Sentence, StructuredEntry};

/// The only lookup failure: network, body or JSON decoding problems all
/// collapse into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Response Parse Error")]
pub struct ResponseParseError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid api url {0:?}")]
    InvalidApiUrl(String),
    #[error("timeout must be at least one second")]
    InvalidTimeout,
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

pub struct Dictionary {
    client: reqwest::Client,
    api_url: Url,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            // constant, always parses
            api_url: Url::parse(DICTIONARY_API_URL).expect("valid dictionary api url"),
        }
    }

    pub fn with_config(config: &DictionaryConfig) -> Result<Self, ConfigError> {
        let api_url = Url::parse(&config.api_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ConfigError::InvalidApiUrl(config.api_url.clone()))?;
        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            if seconds == 0 {
                return Err(ConfigError::InvalidTimeout);
            }
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        Ok(Self {
            client: builder.build()?,
            api_url,
        })
    }

    /// Raw JSON response for `word` in the `language` dictionary.
    pub async fn fetch(&self, word: &str, language: &str) -> Result<Value, ResponseParseError> {
        fetch_entries(&self.client, &self.api_url, word, language).await
    }

    /// Looks `word` up and renders the text report.
    pub async fn define(&self, word: &str, language: &str) -> Result<String, ResponseParseError> {
        let response = self.fetch(word, language).await?;
        Ok(format_report(&response))
    }

    /// Looks `word` up and returns the structured view of its first entry.
    pub async fn define_structured(
        &self,
        word: &str,
        language: &str,
    ) -> Result<StructuredEntry, ResponseParseError> {
        let response = self.fetch(word, language).await?;
        structured_entry(&response).ok_or_else(|| {
            tracing::debug!("response for {word:?} has no entry object");
            ResponseParseError
        })
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// [`Dictionary::define`] against the public API with default settings.
pub async fn define(word: &str, language: &str) -> Result<String, ResponseParseError> {
    Dictionary::new().define(word, language).await
}
