use indexmap::IndexMap;
use models::{AlbumRecord, Rating, SongEntry, RATING_MAX, RATING_MIN};

use crate::error::ValidationError;
use crate::text::{display_case, normalize_key};

const AVG_SONG_WEIGHT: f64 = 2.0;
const COMPONENT_WEIGHT: f64 = 1.5;
const WEIGHT_TOTAL: f64 = 6.5;
const SKIP_PENALTY: f64 = 0.2;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Validated scoring inputs. Every score lies in [1, 10].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingComponents {
    pub avg_song: f64,
    pub lyricism: f64,
    pub instrumentation: f64,
    pub vibe: f64,
    pub skips: u32,
}

impl RatingComponents {
    pub fn new(
        avg_song: f64,
        lyricism: f64,
        instrumentation: f64,
        vibe: f64,
        skips: i64,
    ) -> Result<Self, ValidationError> {
        let avg_song = check_score("avgSong", avg_song)?;
        let lyricism = check_score("lyricism", lyricism)?;
        let instrumentation = check_score("instrumentation", instrumentation)?;
        let vibe = check_score("vibe", vibe)?;
        if skips < 0 {
            return Err(ValidationError::NegativeSkips(skips));
        }
        // Any count past u32::MAX already scores the floor.
        let skips = u32::try_from(skips).unwrap_or(u32::MAX);

        Ok(Self {
            avg_song,
            lyricism,
            instrumentation,
            vibe,
            skips,
        })
    }

    /// Weighted score, rounded to two decimals and held inside [1, 10] no
    /// matter how many skips are charged.
    pub fn score(&self) -> f64 {
        let weighted = (self.avg_song * AVG_SONG_WEIGHT
            + self.lyricism * COMPONENT_WEIGHT
            + self.instrumentation * COMPONENT_WEIGHT
            + self.vibe * COMPONENT_WEIGHT)
            / WEIGHT_TOTAL
            - f64::from(self.skips) * SKIP_PENALTY;
        round2(weighted).clamp(RATING_MIN, RATING_MAX)
    }
}

fn check_score(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && (RATING_MIN..=RATING_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange { field, value })
    }
}

pub fn compute_rating(
    avg_song: f64,
    lyricism: f64,
    instrumentation: f64,
    vibe: f64,
    skips: i64,
) -> Result<f64, ValidationError> {
    RatingComponents::new(avg_song, lyricism, instrumentation, vibe, skips).map(|c| c.score())
}

/// Parse a required numeric form field.
pub fn parse_score(field: &'static str, input: &str) -> Result<f64, ValidationError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::NotANumber {
            field,
            input: input.to_string(),
        })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SongAverage {
    /// Mean of the numeric song ratings; `None` when no song has one.
    pub average: Option<f64>,
    pub skips: u32,
    pub rated: usize,
}

/// Average the numeric song ratings. Interludes are ignored, skipped songs
/// are only counted.
pub fn song_average<'a, I>(songs: I) -> SongAverage
where
    I: IntoIterator<Item = &'a Rating>,
{
    let mut total = 0.0;
    let mut rated = 0usize;
    let mut skips = 0u32;

    for song in songs {
        match song {
            Rating::Interlude => {}
            Rating::Skip => skips += 1,
            Rating::Numeric(v) => {
                total += v;
                rated += 1;
            }
        }
    }

    let average = (rated > 0).then(|| round2(total / rated as f64));
    SongAverage {
        average,
        skips,
        rated,
    }
}

/// Label raw song tokens as "Song 1", "Song 2", ... Blank tokens are left
/// out but still consume their position.
pub fn songs_from_tokens<S: AsRef<str>>(
    tokens: &[S],
) -> Result<IndexMap<String, Rating>, ValidationError> {
    let mut songs = IndexMap::new();
    for (idx, token) in tokens.iter().enumerate() {
        let token = token.as_ref().trim();
        if token.is_empty() {
            continue;
        }
        let label = format!("Song {}", idx + 1);
        let rating =
            Rating::parse_token(token).ok_or_else(|| ValidationError::InvalidSongRating {
                label: label.clone(),
                input: token.to_string(),
            })?;
        songs.insert(label, rating);
    }
    Ok(songs)
}

#[derive(Debug, Clone, PartialEq)]
pub enum AverageSource {
    Manual(f64),
    Songs(IndexMap<String, Rating>),
}

/// Marks an album as deliberately unscored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exemption {
    Skip,
    Interlude,
}

impl From<Exemption> for Rating {
    fn from(e: Exemption) -> Self {
        match e {
            Exemption::Skip => Rating::Skip,
            Exemption::Interlude => Rating::Interlude,
        }
    }
}

/// Everything the user entered for one album.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumDraft {
    pub name: String,
    pub average: AverageSource,
    pub lyricism: f64,
    pub instrumentation: f64,
    pub vibe: f64,
    /// Ignored when `average` carries per-song ratings.
    pub skips: i64,
    pub exemption: Option<Exemption>,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub release_date: Option<String>,
    pub cover: Option<String>,
    pub spotify_url: Option<String>,
}

impl AlbumDraft {
    pub fn new(name: impl Into<String>, average: AverageSource) -> Self {
        Self {
            name: name.into(),
            average,
            lyricism: RATING_MIN,
            instrumentation: RATING_MIN,
            vibe: RATING_MIN,
            skips: 0,
            exemption: None,
            artist: None,
            genre: None,
            release_date: None,
            cover: None,
            spotify_url: None,
        }
    }
}

/// Validate a draft and produce the record to store under the returned key.
pub fn build_record(draft: AlbumDraft) -> Result<(String, AlbumRecord), ValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let (avg_song, skips, songs) = match draft.average {
        AverageSource::Manual(avg) => (avg, draft.skips, IndexMap::new()),
        AverageSource::Songs(songs) => {
            let summary = song_average(songs.values());
            let avg = summary.average.ok_or(ValidationError::NoSongAverage)?;
            let songs = songs
                .into_iter()
                .map(|(label, rating)| (label, SongEntry { rating }))
                .collect();
            (avg, i64::from(summary.skips), songs)
        }
    };

    let components = RatingComponents::new(
        avg_song,
        draft.lyricism,
        draft.instrumentation,
        draft.vibe,
        skips,
    )?;

    let rating = match draft.exemption {
        Some(exemption) => exemption.into(),
        None => Rating::Numeric(components.score()),
    };

    let record = AlbumRecord {
        display_name: Some(display_case(name)),
        rating,
        avg_song: components.avg_song,
        lyricism: components.lyricism,
        instrumentation: components.instrumentation,
        vibe: components.vibe,
        skips: components.skips,
        songs,
        artist: non_blank(draft.artist),
        genre: non_blank(draft.genre),
        release_date: non_blank(draft.release_date),
        cover: non_blank(draft.cover),
        spotify_url: non_blank(draft.spotify_url),
    };

    Ok((normalize_key(name), record))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
