use std::fmt::Write;

use album_engine::analytics::RankedGroup;
use album_engine::dates::format_release_date;
use album_engine::pagination::{arrow_targets, page_buttons, PageButton};
use album_engine::search::Candidates;
use album_engine::session::{ArtistView, RatingsView};
use album_engine::text::{display_name, spotify_album_id};
use models::{AlbumCollection, AlbumRecord, Rating};

fn rating_text(rating: &Rating) -> String {
    match rating {
        Rating::Numeric(v) => format!("{v:.2}"),
        other => other.to_string(),
    }
}

fn tier_text(rating: &Rating) -> String {
    rating.tier().map(|t| t.to_string()).unwrap_or_default()
}

pub fn ratings_view(view: &RatingsView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Sorted by: {}", view.sort_option.label());

    if view.rows.is_empty() {
        let _ = writeln!(out, "No albums on this page.");
    }

    for row in &view.rows {
        let _ = write!(
            out,
            "{}  {}  {}",
            row.display_name,
            rating_text(&row.rating),
            tier_text(&row.rating)
        );
        if let Some(tag) = &row.best_tag {
            let _ = write!(out, "  {tag}");
        }
        out.push('\n');
        if let Some(metadata) = &row.metadata {
            let _ = writeln!(out, "    {metadata}");
        }
    }

    let _ = writeln!(
        out,
        "{}",
        page_bar(&view.buttons, view.page, view.prev_page, view.next_page)
    );
    let _ = write!(out, "{} albums", view.total_albums);
    out
}

/// `< 1 … [5] 6 … 10 >` with the current page bracketed and disabled arrows
/// left out.
pub fn page_bar(
    buttons: &[PageButton],
    current: usize,
    prev: Option<usize>,
    next: Option<usize>,
) -> String {
    let mut parts = Vec::with_capacity(buttons.len() + 2);
    if prev.is_some() {
        parts.push("<".to_string());
    }
    for button in buttons {
        parts.push(match button {
            PageButton::Page(n) if *n == current => format!("[{n}]"),
            PageButton::Page(n) => n.to_string(),
            PageButton::Ellipsis => "…".to_string(),
        });
    }
    if next.is_some() {
        parts.push(">".to_string());
    }
    parts.join(" ")
}

pub fn album_detail(key: &str, record: &AlbumRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  {}  {}",
        display_name(key, record),
        rating_text(&record.rating),
        tier_text(&record.rating)
    );
    let _ = writeln!(
        out,
        "avg_song={} lyricism={} instrumentation={} vibe={} skips={}",
        record.avg_song, record.lyricism, record.instrumentation, record.vibe, record.skips
    );
    if let Some(artist) = &record.artist {
        let _ = writeln!(out, "artist={artist}");
    }
    if let Some(genre) = &record.genre {
        let _ = writeln!(out, "genre={genre}");
    }
    if let Some(date) = &record.release_date {
        let _ = writeln!(out, "released={}", format_release_date(date));
    }
    if let Some(url) = &record.spotify_url {
        match spotify_album_id(url) {
            Some(id) => {
                let _ = writeln!(out, "spotify_album_id={id}");
            }
            None => {
                let _ = writeln!(out, "spotify_url={url}");
            }
        }
    }
    for (label, song) in &record.songs {
        let _ = writeln!(out, "  {label}: {}", song.rating);
    }
    out.trim_end().to_string()
}

pub fn candidates(found: &Candidates, records: &AlbumCollection) -> String {
    let mut out = String::new();
    let sections = [
        ("Albums", &found.album_matches),
        ("By artist", &found.artist_matches),
        ("Acronyms", &found.acronym_matches),
    ];
    for (title, keys) in sections {
        if keys.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{title}:");
        for key in keys {
            let name = records
                .get(key)
                .map(|r| display_name(key, r))
                .unwrap_or_else(|| key.clone());
            let _ = writeln!(out, "  {name}");
        }
    }
    let _ = write!(out, "Not listed? Rate \"{}\" with --force", found.literal);
    out
}

pub fn ranked_groups(title: &str, groups: &[RankedGroup]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    if groups.is_empty() {
        let _ = write!(out, "No rated albums yet.");
        return out;
    }
    for (idx, group) in groups.iter().enumerate() {
        let noun = if group.count == 1 { "album" } else { "albums" };
        let _ = writeln!(
            out,
            "{}. {}  avg {:.2}  ({} {noun})",
            idx + 1,
            group.label,
            group.avg_rating,
            group.count
        );
    }
    out.trim_end().to_string()
}

pub fn artist_view(view: &ArtistView) -> String {
    let mut out = String::new();
    for (artist, group) in &view.artists {
        let avg = group
            .avg_rating
            .map(|v| format!("{v:.2}"))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, "{artist}  avg {avg}");
        for album in &group.albums {
            let _ = writeln!(out, "  {}  {}", album.name, rating_text(&album.rating));
        }
    }
    let (prev, next) = arrow_targets(view.page, view.total_pages);
    let buttons = page_buttons(view.page, view.total_pages);
    let _ = write!(out, "{}", page_bar(&buttons, view.page, prev, next));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageButton::{Ellipsis, Page};

    #[test]
    fn page_bar_brackets_current_page() {
        let buttons = [Page(1), Ellipsis, Page(5), Page(6), Page(7), Ellipsis, Page(10)];
        assert_eq!(
            page_bar(&buttons, 6, Some(5), Some(7)),
            "< 1 … 5 [6] 7 … 10 >"
        );
        assert_eq!(page_bar(&[Page(1)], 1, None, None), "[1]");
    }

    #[test]
    fn ratings_show_two_decimals() {
        assert_eq!(rating_text(&Rating::Numeric(7.5)), "7.50");
        assert_eq!(rating_text(&Rating::Skip), "Skip");
    }

    #[test]
    fn ranked_groups_pluralize() {
        let groups = vec![
            RankedGroup {
                label: "1990s".to_string(),
                count: 1,
                avg_rating: 9.0,
            },
            RankedGroup {
                label: "2010s".to_string(),
                count: 3,
                avg_rating: 8.45,
            },
        ];
        assert_eq!(
            ranked_groups("Top decades", &groups),
            "Top decades\n1. 1990s  avg 9.00  (1 album)\n2. 2010s  avg 8.45  (3 albums)"
        );
        assert_eq!(ranked_groups("Top genres", &[]), "Top genres\nNo rated albums yet.");
    }
}
