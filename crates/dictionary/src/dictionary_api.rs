use reqwest::Url;
use serde_json::Value;

use crate::ResponseParseError;

pub(crate) const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries";

/// `{base}/{language}/{word}` with both segments percent-encoded.
pub(crate) fn entries_url(base: &Url, word: &str, language: &str) -> Result<Url, ResponseParseError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| {
            tracing::debug!("api url {base} can't take path segments");
            ResponseParseError
        })?
        .pop_if_empty()
        .extend([language, word]);
    Ok(url)
}

/// Fetches the raw JSON response for `word`.
///
/// The status code is not checked: the API answers unknown words with a 404
/// carrying a JSON error object, which is returned as is.
pub(crate) async fn fetch_entries(
    client: &reqwest::Client,
    base: &Url,
    word: &str,
    language: &str,
) -> Result<Value, ResponseParseError> {
    let url = entries_url(base, word, language)?;
    tracing::debug!(%url, "requesting definition");
    let res: reqwest::Response = client.get(url).send().await.map_err(discard)?;
    tracing::debug!(status = %res.status(), "received response");
    res.json::<Value>().await.map_err(discard)
}

fn discard(error: reqwest::Error) -> ResponseParseError {
    tracing::debug!("dictionary request failed: {error}");
    ResponseParseError
}
