use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use models::{AlbumCollection, AlbumRecord, SortField, SortOption};
use ordered_float::OrderedFloat;

use crate::dates::{decade_label, release_sort_key, release_year, UNKNOWN_DECADE};
use crate::text::{artist_label, normalize_genre};

/// A record paired with its key, borrowed from the collection.
pub type Entry<'a> = (&'a str, &'a AlbumRecord);

/// Order the whole collection for display.
///
/// Rating sorts break ties by key; sentinel-rated albums come after every
/// scored album in both directions. The other sorts are stable over key
/// order, so equal artists/genres/dates stay alphabetical by album.
pub fn sort_records(records: &AlbumCollection, option: SortOption) -> Vec<Entry<'_>> {
    let mut entries: Vec<Entry<'_>> = records.iter().map(|(k, r)| (k.as_str(), r)).collect();
    let descending = option.is_descending();

    match option.field() {
        SortField::Rating => entries.sort_by(|a, b| compare_rating(a, b, descending)),
        SortField::Artist => entries.sort_by(|a, b| {
            directed(
                compare_text(a.1.artist.as_deref(), b.1.artist.as_deref()),
                descending,
            )
        }),
        SortField::Genre => entries.sort_by(|a, b| {
            directed(
                compare_text(a.1.genre.as_deref(), b.1.genre.as_deref()),
                descending,
            )
        }),
        SortField::ReleaseDate => entries.sort_by(|a, b| {
            directed(
                release_sort_key(a.1.release_date.as_deref())
                    .cmp(&release_sort_key(b.1.release_date.as_deref())),
                descending,
            )
        }),
    }

    entries
}

fn directed(ord: Ordering, descending: bool) -> Ordering {
    if descending {
        ord.reverse()
    } else {
        ord
    }
}

fn compare_rating(a: &Entry<'_>, b: &Entry<'_>, descending: bool) -> Ordering {
    match (a.1.rating_value(), b.1.rating_value()) {
        (Some(x), Some(y)) => directed(OrderedFloat(x).cmp(&OrderedFloat(y)), descending)
            .then_with(|| compare_keys(a.0, b.0)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => compare_keys(a.0, b.0),
    }
}

fn compare_keys(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn compare_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.unwrap_or("").trim();
    let b = b.unwrap_or("").trim();
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// How records are bucketed for "best in group" tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grouping {
    Genre,
    Artist,
    Decade,
}

impl Grouping {
    /// Rating sorts have no grouping.
    pub const fn for_sort(option: SortOption) -> Option<Self> {
        match option.field() {
            SortField::Rating => None,
            SortField::Artist => Some(Self::Artist),
            SortField::Genre => Some(Self::Genre),
            SortField::ReleaseDate => Some(Self::Decade),
        }
    }

    pub fn group_of(self, record: &AlbumRecord) -> String {
        match self {
            Self::Genre => normalize_genre(record.genre.as_deref()),
            Self::Artist => artist_label(record.artist.as_deref()),
            Self::Decade => release_year(record.release_date.as_deref())
                .map(decade_label)
                .unwrap_or_else(|| UNKNOWN_DECADE.to_string()),
        }
    }

    pub const fn preposition(self) -> &'static str {
        match self {
            Self::Artist => "by",
            Self::Genre | Self::Decade => "in",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Best {
    rating: f64,
    key: String,
}

impl Best {
    // Equal ratings go to the alphabetically first key, independent of the
    // order records are visited in.
    fn beaten_by(&self, rating: f64, key: &str) -> bool {
        rating > self.rating || (rating == self.rating && key < self.key.as_str())
    }
}

/// Winners of each group plus the best-rated album overall.
#[derive(Debug, Clone, PartialEq)]
pub struct BestTags {
    pub grouping: Option<Grouping>,
    by_group: HashMap<String, Best>,
    overall: Option<Best>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestTag {
    pub group: String,
    pub preposition: &'static str,
    /// Also the best-rated album of the whole collection.
    pub overall: bool,
}

impl fmt::Display for BestTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trophy = if self.overall { "🏆🏆" } else { "🏆" };
        write!(f, "{trophy} Best rated {} {}", self.preposition, self.group)
    }
}

impl BestTags {
    pub fn compute<'a, I>(entries: I, option: SortOption) -> Self
    where
        I: IntoIterator<Item = Entry<'a>>,
    {
        let grouping = Grouping::for_sort(option);
        let mut by_group: HashMap<String, Best> = HashMap::new();
        let mut overall: Option<Best> = None;

        for (key, record) in entries {
            let Some(rating) = record.rating_value() else {
                continue;
            };

            if let Some(grouping) = grouping {
                let group = grouping.group_of(record);
                match by_group.get_mut(&group) {
                    Some(best) if !best.beaten_by(rating, key) => {}
                    Some(best) => {
                        *best = Best {
                            rating,
                            key: key.to_string(),
                        }
                    }
                    None => {
                        by_group.insert(
                            group,
                            Best {
                                rating,
                                key: key.to_string(),
                            },
                        );
                    }
                }
            }

            if overall.as_ref().map_or(true, |b| b.beaten_by(rating, key)) {
                overall = Some(Best {
                    rating,
                    key: key.to_string(),
                });
            }
        }

        Self {
            grouping,
            by_group,
            overall,
        }
    }

    pub fn best_overall(&self) -> Option<&str> {
        self.overall.as_ref().map(|b| b.key.as_str())
    }

    pub fn best_in_group(&self, group: &str) -> Option<&str> {
        self.by_group.get(group).map(|b| b.key.as_str())
    }

    /// Tag for a record that won its group, if it did.
    pub fn tag_for(&self, key: &str, record: &AlbumRecord) -> Option<BestTag> {
        let grouping = self.grouping?;
        let group = grouping.group_of(record);
        if self.best_in_group(&group) != Some(key) {
            return None;
        }
        Some(BestTag {
            group,
            preposition: grouping.preposition(),
            overall: self.best_overall() == Some(key),
        })
    }
}
