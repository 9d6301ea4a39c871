use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

pub mod config;

pub const RATING_MIN: f64 = 1.0;
pub const RATING_MAX: f64 = 10.0;

/// Storage identity of the record collection.
pub const RECORDS_KEY: &str = "albumRatings";
/// Storage identity of the remembered sort option.
pub const SORT_OPTION_KEY: &str = "sortOption";

/// All saved albums keyed by normalized album name.
///
/// A `BTreeMap` so that "natural key order" is lexicographic and stable
/// across loads.
pub type AlbumCollection = BTreeMap<String, AlbumRecord>;

/// An album or song rating: either a score in [1, 10] or a token that exempts
/// the entry from every numeric computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRating", into = "RawRating")]
pub enum Rating {
    Numeric(f64),
    Skip,
    Interlude,
}

impl Rating {
    /// Build a numeric rating, rejecting values outside [1, 10].
    pub fn numeric(value: f64) -> Option<Self> {
        if value.is_finite() && (RATING_MIN..=RATING_MAX).contains(&value) {
            Some(Self::Numeric(value))
        } else {
            None
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Numeric(v) => Some(*v),
            Self::Skip | Self::Interlude => None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Self::Numeric(_))
    }

    /// Parse a user-entered token ("7", "8.5", "S", "skip", "I", "interlude").
    pub fn parse_token(s: &str) -> Option<Self> {
        let s = s.trim();
        match s.to_ascii_uppercase().as_str() {
            "S" | "SKIP" => Some(Self::Skip),
            "I" | "INTERLUDE" => Some(Self::Interlude),
            _ => s.parse::<f64>().ok().and_then(Self::numeric),
        }
    }

    pub fn tier(&self) -> Option<RatingTier> {
        match self {
            Self::Numeric(v) => Some(RatingTier::for_value(*v)),
            Self::Skip => Some(RatingTier::Skip),
            Self::Interlude => None,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(v) => write!(f, "{v}"),
            Self::Skip => f.write_str("Skip"),
            Self::Interlude => f.write_str("Interlude"),
        }
    }
}

/// Persisted form of [`Rating`]: a JSON number, or a string token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawRating {
    Number(f64),
    Token(String),
}

impl TryFrom<RawRating> for Rating {
    type Error = String;

    fn try_from(raw: RawRating) -> Result<Self, Self::Error> {
        match raw {
            RawRating::Number(v) => {
                Rating::numeric(v).ok_or_else(|| format!("rating out of range: {v}"))
            }
            RawRating::Token(s) => {
                Rating::parse_token(&s).ok_or_else(|| format!("invalid rating token: {s:?}"))
            }
        }
    }
}

impl From<Rating> for RawRating {
    fn from(rating: Rating) -> Self {
        match rating {
            Rating::Numeric(v) => RawRating::Number(v),
            Rating::Skip => RawRating::Token("S".to_string()),
            Rating::Interlude => RawRating::Token("I".to_string()),
        }
    }
}

/// Display bands for a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum RatingTier {
    #[strum(serialize = "Skip")]
    Skip,
    #[strum(serialize = "Weak")]
    Weak,
    #[strum(serialize = "Mid")]
    Decent,
    #[strum(serialize = "Good")]
    Good,
    #[strum(serialize = "Great")]
    Great,
    #[strum(serialize = "Excellent")]
    Excellent,
    #[strum(serialize = "Masterpiece")]
    Masterpiece,
}

impl RatingTier {
    pub fn for_value(value: f64) -> Self {
        if value < 2.0 {
            Self::Skip
        } else if value < 4.0 {
            Self::Weak
        } else if value < 6.0 {
            Self::Decent
        } else if value < 7.0 {
            Self::Good
        } else if value < 8.0 {
            Self::Great
        } else if value < 9.0 {
            Self::Excellent
        } else {
            Self::Masterpiece
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SongEntry {
    pub rating: Rating,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub rating: Rating,
    pub avg_song: f64,
    pub lyricism: f64,
    pub instrumentation: f64,
    pub vibe: f64,
    pub skips: u32,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub songs: IndexMap<String, SongEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(
        rename = "spotifyURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub spotify_url: Option<String>,
}

impl AlbumRecord {
    pub fn rating_value(&self) -> Option<f64> {
        self.rating.value()
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    Display,
)]
pub enum SortOption {
    #[serde(rename = "ratingAsc")]
    #[strum(serialize = "ratingAsc")]
    RatingAsc,
    #[default]
    #[serde(rename = "ratingDesc")]
    #[strum(serialize = "ratingDesc")]
    RatingDesc,
    #[serde(rename = "artistAsc")]
    #[strum(serialize = "artistAsc")]
    ArtistAsc,
    #[serde(rename = "artistDesc")]
    #[strum(serialize = "artistDesc")]
    ArtistDesc,
    #[serde(rename = "genreAsc")]
    #[strum(serialize = "genreAsc")]
    GenreAsc,
    #[serde(rename = "genreDesc")]
    #[strum(serialize = "genreDesc")]
    GenreDesc,
    #[serde(rename = "dateAsc")]
    #[strum(serialize = "dateAsc")]
    DateAsc,
    #[serde(rename = "dateDesc")]
    #[strum(serialize = "dateDesc")]
    DateDesc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Rating,
    Artist,
    Genre,
    ReleaseDate,
}

impl SortOption {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RatingAsc => "ratingAsc",
            Self::RatingDesc => "ratingDesc",
            Self::ArtistAsc => "artistAsc",
            Self::ArtistDesc => "artistDesc",
            Self::GenreAsc => "genreAsc",
            Self::GenreDesc => "genreDesc",
            Self::DateAsc => "dateAsc",
            Self::DateDesc => "dateDesc",
        }
    }

    pub const fn field(self) -> SortField {
        match self {
            Self::RatingAsc | Self::RatingDesc => SortField::Rating,
            Self::ArtistAsc | Self::ArtistDesc => SortField::Artist,
            Self::GenreAsc | Self::GenreDesc => SortField::Genre,
            Self::DateAsc | Self::DateDesc => SortField::ReleaseDate,
        }
    }

    pub const fn is_descending(self) -> bool {
        matches!(
            self,
            Self::RatingDesc | Self::ArtistDesc | Self::GenreDesc | Self::DateDesc
        )
    }

    /// Menu label shown next to the option.
    pub const fn label(self) -> &'static str {
        match self {
            Self::RatingDesc => "Rating ↑",
            Self::RatingAsc => "Rating ↓",
            Self::ArtistAsc => "Artist A → Z",
            Self::ArtistDesc => "Artist Z → A",
            Self::GenreAsc => "Genre A → Z",
            Self::GenreDesc => "Genre Z → A",
            Self::DateAsc => "Oldest First",
            Self::DateDesc => "Newest First",
        }
    }
}
