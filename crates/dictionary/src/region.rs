use regex::Regex;

/// Two-letter codes used in the API's audio file names.
const REGIONS: &[(&str, &str)] = &[
    ("us", "American"),
    ("uk", "British"),
    ("au", "Australian"),
    ("ca", "Canadian"),
    ("ie", "Irish"),
    ("nz", "New Zealand"),
    ("sa", "South African"),
    ("in", "Indian"),
    ("jm", "Jamaican"),
    ("ph", "Philippine"),
    ("sg", "Singaporean"),
    ("ng", "Nigerian"),
    ("gh", "Ghanaian"),
    ("ke", "Kenyan"),
    ("tz", "Tanzanian"),
    ("zw", "Zimbabwean"),
    ("hk", "Hong Kong"),
    ("my", "Malaysian"),
];

pub fn region_name(code: &str) -> Option<&'static str> {
    REGIONS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
}

/// Resolves the accent region of an audio file such as
/// `https://api.dictionaryapi.dev/media/pronunciations/en/cat-1-us.mp3`.
///
/// The file name must start with `word`, optionally followed by a number, and
/// end in a known two-letter region code.
pub fn region_from_audio_url(url: &str, word: &str) -> Option<&'static str> {
    let pattern = format!(r"{}-\d*-?([a-z]{{2}})\.mp3", regex::escape(word));
    let regex = match Regex::new(&pattern) {
        Ok(regex) => regex,
        Err(error) => {
            tracing::debug!("couldn't build region pattern for {word:?}: {error}");
            return None;
        }
    };
    let code = regex.captures(url)?.get(1)?.as_str();
    region_name(code)
}

/// Raw region code: the two characters right before the `.mp3` suffix.
pub fn region_code_from_audio_url(url: &str) -> Option<&str> {
    let stem = url.strip_suffix(".mp3")?;
    let (start, _) = stem.char_indices().rev().nth(1)?;
    Some(&stem[start..])
}
