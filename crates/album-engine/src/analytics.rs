//! Per-decade, per-genre and per-artist statistics.
//!
//! Sentinel-rated albums ("Skip", "Interlude") never contribute to a count or
//! an average here. A decade or genre holding only sentinels does not appear
//! at all. The artist breakdown still lists them as catalog entries but
//! leaves them out of the artist's average.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use models::{AlbumCollection, Rating};
use ordered_float::OrderedFloat;

use crate::dates::{decade_label, release_sort_key, stats_year};
use crate::scoring::round2;
use crate::text::{artist_label, display_name, normalize_genre};

pub const DEFAULT_TOP_N: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupStats {
    pub count: usize,
    /// Mean rating rounded to two decimals.
    pub avg_rating: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedGroup {
    pub label: String,
    pub count: usize,
    pub avg_rating: f64,
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    count: usize,
    total: f64,
}

impl Tally {
    fn add(&mut self, rating: f64) {
        self.count += 1;
        self.total += rating;
    }

    fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| round2(self.total / self.count as f64))
    }

    fn finish(self) -> Option<GroupStats> {
        Some(GroupStats {
            count: self.count,
            avg_rating: self.average()?,
        })
    }
}

fn finish_all(tallies: BTreeMap<String, Tally>) -> BTreeMap<String, GroupStats> {
    tallies
        .into_iter()
        .filter_map(|(label, tally)| tally.finish().map(|stats| (label, stats)))
        .collect()
}

fn ranked(stats: BTreeMap<String, GroupStats>) -> Vec<RankedGroup> {
    stats
        .into_iter()
        .map(|(label, s)| RankedGroup {
            label,
            count: s.count,
            avg_rating: s.avg_rating,
        })
        .collect()
}

/// Album count and mean rating per decade ("1990s").
///
/// Albums without a recognizable year in 1900..=2025 are left out.
pub fn decade_stats(records: &AlbumCollection) -> BTreeMap<String, GroupStats> {
    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();

    for record in records.values() {
        let Some(rating) = record.rating_value() else {
            continue;
        };
        let Some(year) = stats_year(record.release_date.as_deref()) else {
            continue;
        };
        tallies.entry(decade_label(year)).or_default().add(rating);
    }

    finish_all(tallies)
}

/// Best decades by mean rating. Equal means keep chronological order.
pub fn top_decades(records: &AlbumCollection, n: usize) -> Vec<RankedGroup> {
    let mut groups = ranked(decade_stats(records));
    groups.sort_by_key(|g| Reverse(OrderedFloat(g.avg_rating)));
    groups.truncate(n);
    groups
}

/// Album count and mean rating per canonical genre.
pub fn genre_stats(records: &AlbumCollection) -> BTreeMap<String, GroupStats> {
    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();

    for record in records.values() {
        let Some(rating) = record.rating_value() else {
            continue;
        };
        tallies
            .entry(normalize_genre(record.genre.as_deref()))
            .or_default()
            .add(rating);
    }

    finish_all(tallies)
}

/// Podium ranking: mean rating first, then album count.
pub fn top_genres(records: &AlbumCollection, n: usize) -> Vec<RankedGroup> {
    let mut groups = ranked(genre_stats(records));
    groups.sort_by_key(|g| Reverse((OrderedFloat(g.avg_rating), g.count)));
    groups.truncate(n);
    groups
}

/// Breakdown chart ranking: album count first, then mean rating.
pub fn genre_breakdown(records: &AlbumCollection) -> Vec<RankedGroup> {
    let mut groups = ranked(genre_stats(records));
    groups.sort_by_key(|g| Reverse((g.count, OrderedFloat(g.avg_rating))));
    groups
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArtistAlbum {
    pub key: String,
    pub name: String,
    pub rating: Rating,
    pub release_date: Option<String>,
    pub genre: Option<String>,
    pub spotify_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArtistGroup {
    /// Oldest release first; undated albums lead.
    pub albums: Vec<ArtistAlbum>,
    /// `None` when none of the albums has a numeric rating.
    pub avg_rating: Option<f64>,
}

pub fn group_by_artist(records: &AlbumCollection) -> BTreeMap<String, ArtistGroup> {
    let mut albums_by_artist: BTreeMap<String, (Vec<ArtistAlbum>, Tally)> = BTreeMap::new();

    for (key, record) in records {
        let (albums, tally) = albums_by_artist
            .entry(artist_label(record.artist.as_deref()))
            .or_default();
        if let Some(rating) = record.rating_value() {
            tally.add(rating);
        }
        albums.push(ArtistAlbum {
            key: key.clone(),
            name: display_name(key, record),
            rating: record.rating,
            release_date: record.release_date.clone(),
            genre: record.genre.clone(),
            spotify_url: record.spotify_url.clone(),
        });
    }

    albums_by_artist
        .into_iter()
        .map(|(artist, (mut albums, tally))| {
            albums.sort_by_key(|a| release_sort_key(a.release_date.as_deref()));
            let group = ArtistGroup {
                albums,
                avg_rating: tally.average(),
            };
            (artist, group)
        })
        .collect()
}

/// Artists by mean rating, unrated artists last, ties alphabetical.
pub fn artist_ranking(records: &AlbumCollection) -> Vec<(String, ArtistGroup)> {
    let mut artists: Vec<_> = group_by_artist(records).into_iter().collect();
    artists.sort_by_key(|(_, g)| Reverse(g.avg_rating.map(OrderedFloat)));
    artists
}
