pub mod analytics;
pub mod dates;
pub mod distance;
pub mod error;
pub mod pagination;
pub mod scoring;
pub mod search;
pub mod session;
pub mod sorting;
pub mod text;

pub use analytics::{
    artist_ranking, decade_stats, genre_breakdown, genre_stats, group_by_artist, top_decades,
    top_genres,
};
pub use distance::levenshtein;
pub use error::{SearchError, ValidationError};
pub use pagination::{page_buttons, paginate, total_pages};
pub use scoring::{build_record, compute_rating, song_average, AlbumDraft, AverageSource};
pub use search::{resolve, resolve_with, Resolution};
pub use session::Session;
pub use sorting::{sort_records, BestTags};
pub use text::{display_case, normalize_genre, normalize_key};
