use models::config::AppConfig;
use models::{AlbumCollection, AlbumRecord, Rating, RatingTier, SortField, SortOption};

use crate::analytics::{artist_ranking, ArtistGroup};
use crate::dates::format_release_date;
use crate::pagination::{arrow_targets, page_buttons, paginate, PageButton};
use crate::sorting::{sort_records, BestTag, BestTags};
use crate::text::{capitalize_first, display_name};

pub const DEFAULT_ALBUMS_PER_PAGE: usize = 5;
pub const DEFAULT_ARTISTS_PER_PAGE: usize = 5;

/// Browsing state for one user session: what is sorted how, which pages are
/// open, and whether an album is being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub sort_option: SortOption,
    pub page: usize,
    pub artist_page: usize,
    pub edit_mode: bool,
    pub albums_per_page: usize,
    pub artists_per_page: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SortOption::default())
    }
}

impl Session {
    pub fn new(sort_option: SortOption) -> Self {
        Self {
            sort_option,
            page: 1,
            artist_page: 1,
            edit_mode: false,
            albums_per_page: DEFAULT_ALBUMS_PER_PAGE,
            artists_per_page: DEFAULT_ARTISTS_PER_PAGE,
        }
    }

    pub fn from_config(config: &AppConfig, sort_option: SortOption) -> Self {
        Self {
            albums_per_page: config.albums_per_page,
            artists_per_page: config.artists_per_page,
            ..Self::new(sort_option)
        }
    }

    /// Switching the sort always returns to the first page.
    pub fn select_sort(&mut self, sort_option: SortOption) {
        self.sort_option = sort_option;
        self.page = 1;
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn go_to_artist_page(&mut self, page: usize) {
        self.artist_page = page;
    }

    pub fn begin_edit(&mut self) {
        self.edit_mode = true;
    }

    pub fn cancel_edit(&mut self) {
        self.edit_mode = false;
    }

    pub fn ratings_view(&self, records: &AlbumCollection) -> RatingsView {
        let sorted = sort_records(records, self.sort_option);
        let tags = BestTags::compute(sorted.iter().copied(), self.sort_option);
        let page = paginate(&sorted, self.albums_per_page, self.page);
        let (prev_page, next_page) = arrow_targets(self.page, page.total_pages);

        let rows = page
            .items
            .iter()
            .map(|&(key, record)| RatingRow {
                key: key.to_string(),
                display_name: display_name(key, record),
                rating: record.rating,
                tier: record.rating.tier(),
                best_tag: tags.tag_for(key, record),
                metadata: visible_metadata(self.sort_option, record),
                cover: record.cover.clone(),
            })
            .collect();

        RatingsView {
            sort_option: self.sort_option,
            rows,
            page: self.page,
            total_pages: page.total_pages,
            total_albums: sorted.len(),
            buttons: page_buttons(self.page, page.total_pages),
            prev_page,
            next_page,
        }
    }

    pub fn artist_view(&self, records: &AlbumCollection) -> ArtistView {
        let ranking = artist_ranking(records);
        let page = paginate(&ranking, self.artists_per_page, self.artist_page);
        ArtistView {
            artists: page.items.to_vec(),
            page: self.artist_page,
            total_pages: page.total_pages,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingRow {
    pub key: String,
    pub display_name: String,
    pub rating: Rating,
    pub tier: Option<RatingTier>,
    pub best_tag: Option<BestTag>,
    pub metadata: Option<String>,
    pub cover: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingsView {
    pub sort_option: SortOption,
    pub rows: Vec<RatingRow>,
    pub page: usize,
    pub total_pages: usize,
    pub total_albums: usize,
    pub buttons: Vec<PageButton>,
    pub prev_page: Option<usize>,
    pub next_page: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArtistView {
    pub artists: Vec<(String, ArtistGroup)>,
    pub page: usize,
    pub total_pages: usize,
}

/// The extra line shown under an album for the active sort: the artist,
/// the genre, or the release date.
pub fn visible_metadata(sort_option: SortOption, record: &AlbumRecord) -> Option<String> {
    let value = match sort_option.field() {
        SortField::Rating => return None,
        SortField::Artist => record.artist.clone(),
        SortField::Genre => record.genre.as_deref().map(capitalize_first),
        SortField::ReleaseDate => record.release_date.as_deref().map(format_release_date),
    };
    value.filter(|v| !v.is_empty())
}
