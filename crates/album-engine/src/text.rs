use std::sync::LazyLock;

use models::AlbumRecord;
use regex::Regex;

pub const UNKNOWN_GENRE: &str = "Unknown Genre";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Storage identity for an album name: trimmed and lowercased.
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Upper-case the first character of every space-separated word.
///
/// Cosmetic only; runs of spaces are preserved and the rest of each word is
/// left untouched.
pub fn display_case(name: &str) -> String {
    name.split(' ')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Map common genre spellings onto one canonical label.
pub fn normalize_genre(genre: Option<&str>) -> String {
    let Some(genre) = genre.map(str::trim).filter(|g| !g.is_empty()) else {
        return UNKNOWN_GENRE.to_string();
    };

    match genre.to_lowercase().as_str() {
        "rap" | "hip hop" | "hip-hop" | "hiphop" | "hip-hop/rap" => "Rap".to_string(),
        "r&b" | "rnb" | "rhythm and blues" => "R&B".to_string(),
        "electronic" | "edm" | "dance" => "Electronic".to_string(),
        _ => genre.to_string(),
    }
}

pub fn artist_label(artist: Option<&str>) -> String {
    artist
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .unwrap_or(UNKNOWN_ARTIST)
        .to_string()
}

/// Stored display name, or the key title-cased when none was stored.
pub fn display_name(key: &str, record: &AlbumRecord) -> String {
    record
        .display_name
        .clone()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| display_case(key))
}

static SPOTIFY_ALBUM_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"album/([a-zA-Z0-9]+)(?:\?|$)").expect("static regex"));

/// Album id of an `open.spotify.com/album/<id>` link.
pub fn spotify_album_id(url: &str) -> Option<&str> {
    SPOTIFY_ALBUM_ID
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Initials of a title, e.g. "The Dark Side of the Moon" -> "dsotm".
///
/// A leading "the" is dropped and "lp" keeps both letters.
pub fn acronym(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .enumerate()
        .filter(|(idx, word)| !(*idx == 0 && *word == "the"))
        .map(|(_, word)| {
            if word == "lp" {
                "lp".to_string()
            } else {
                word.chars().take(1).collect()
            }
        })
        .collect()
}
