#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("album name must not be empty")]
    EmptyName,
    #[error("{field} must be a number between 1 and 10 (got {value})")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("{field} must be a number (got {input:?})")]
    NotANumber { field: &'static str, input: String },
    #[error("skips must not be negative (got {0})")]
    NegativeSkips(i64),
    #[error("song {label:?} has an invalid rating {input:?} (expected 1-10, S or I)")]
    InvalidSongRating { label: String, input: String },
    #[error("no rated songs: at least one song needs a numeric rating")]
    NoSongAverage,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("please enter an album name")]
    EmptyInput,
}
