use models::AlbumCollection;

use crate::distance::{fuzzy_match, within_distance, DEFAULT_MAX_DISTANCE};
use crate::error::SearchError;
use crate::text::{acronym, display_name, normalize_key};

/// Acronyms shorter than this match too much to be useful.
const MIN_ACRONYM_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A record is stored under exactly the normalized input.
    Exact { key: String },
    /// No exact record, but some look close.
    Candidates(Candidates),
    /// Nothing close; the caller should offer to create `literal`.
    NotFound { literal: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    /// Keys within the edit budget of the input, in key order.
    pub album_matches: Vec<String>,
    /// Keys whose artist is within the edit budget, in key order.
    pub artist_matches: Vec<String>,
    /// Keys whose title initials equal the input, in key order.
    pub acronym_matches: Vec<String>,
    /// The input as typed, for the "rate it anyway" escape.
    pub literal: String,
}

pub fn resolve(input: &str, records: &AlbumCollection) -> Result<Resolution, SearchError> {
    resolve_with(input, records, DEFAULT_MAX_DISTANCE)
}

pub fn resolve_with(
    input: &str,
    records: &AlbumCollection,
    max_distance: usize,
) -> Result<Resolution, SearchError> {
    let literal = input.trim();
    if literal.is_empty() {
        return Err(SearchError::EmptyInput);
    }

    let query = normalize_key(literal);
    if records.contains_key(&query) {
        return Ok(Resolution::Exact { key: query });
    }

    let album_matches: Vec<String> =
        fuzzy_match(&query, records.keys().map(String::as_str), max_distance)
            .into_iter()
            .map(str::to_string)
            .collect();

    let artist_matches: Vec<String> = records
        .iter()
        .filter(|(_, record)| {
            record
                .artist
                .as_deref()
                .map(normalize_key)
                .filter(|artist| !artist.is_empty())
                .is_some_and(|artist| within_distance(&query, &artist, max_distance))
        })
        .map(|(key, _)| key.clone())
        .collect();

    let acronym_matches: Vec<String> = if query.contains(char::is_whitespace) {
        Vec::new()
    } else {
        records
            .iter()
            .filter(|(key, _)| !album_matches.contains(key))
            .filter(|(key, record)| {
                let initials = acronym(&display_name(key, record));
                initials.chars().count() >= MIN_ACRONYM_LEN && initials == query
            })
            .map(|(key, _)| key.clone())
            .collect()
    };

    tracing::debug!(
        query = %query,
        albums = album_matches.len(),
        artists = artist_matches.len(),
        acronyms = acronym_matches.len(),
        "resolved fuzzy candidates"
    );

    if album_matches.is_empty() && artist_matches.is_empty() && acronym_matches.is_empty() {
        return Ok(Resolution::NotFound {
            literal: literal.to_string(),
        });
    }

    Ok(Resolution::Candidates(Candidates {
        album_matches,
        artist_matches,
        acronym_matches,
        literal: literal.to_string(),
    }))
}

/// Display names of every saved album, for autocompletion.
pub fn suggestion_names(records: &AlbumCollection) -> Vec<String> {
    records
        .iter()
        .map(|(key, record)| display_name(key, record))
        .collect()
}
