mod common;

use album_engine::pagination::PageButton;
use album_engine::sort_records;
use album_engine::Session;
use common::library;
use models::{Rating, SortOption};
use strum::IntoEnumIterator;

#[test]
fn first_page_of_default_view() {
    let records = library();
    let view = Session::default().ratings_view(&records);

    assert_eq!(view.sort_option, SortOption::RatingDesc);
    assert_eq!(view.total_albums, 8);
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.buttons, vec![PageButton::Page(1), PageButton::Page(2)]);
    assert_eq!((view.prev_page, view.next_page), (None, Some(2)));

    let names: Vec<&str> = view.rows.iter().map(|r| r.display_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "The Dark Side of the Moon",
            "To Pimp A Butterfly",
            "Blonde",
            "Damn",
            "Graduation"
        ]
    );
    // Rating sorts carry neither tags nor metadata.
    assert!(view.rows.iter().all(|r| r.best_tag.is_none()));
    assert!(view.rows.iter().all(|r| r.metadata.is_none()));
}

#[test]
fn sentinels_trail_the_last_page() {
    let records = library();
    let mut session = Session::default();
    session.go_to_page(2);
    let view = session.ratings_view(&records);

    let keys: Vec<&str> = view.rows.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["blond", "yeezus", "skit collection"]);
    assert_eq!(view.rows[2].rating, Rating::Skip);
    assert_eq!(view.rows[2].tier, None);
    assert_eq!((view.prev_page, view.next_page), (Some(1), None));
}

#[test]
fn changing_sort_resets_the_page() {
    let mut session = Session::default();
    session.go_to_page(2);
    session.select_sort(SortOption::ArtistAsc);
    assert_eq!(session.page, 1);
    assert_eq!(session.sort_option, SortOption::ArtistAsc);
}

#[test]
fn artist_sort_tags_group_winners() {
    let records = library();
    let mut session = Session::new(SortOption::ArtistAsc);
    session.albums_per_page = 10;
    let view = session.ratings_view(&records);

    let blonde = view.rows.iter().find(|r| r.key == "blonde").unwrap();
    let tag = blonde.best_tag.as_ref().unwrap();
    assert_eq!(tag.to_string(), "🏆 Best rated by Frank Ocean");
    assert_eq!(blonde.metadata.as_deref(), Some("Frank Ocean"));

    let floyd = view
        .rows
        .iter()
        .find(|r| r.key == "the dark side of the moon")
        .unwrap();
    assert!(floyd.best_tag.as_ref().unwrap().overall);

    let blond = view.rows.iter().find(|r| r.key == "blond").unwrap();
    assert!(blond.best_tag.is_none());

    let skit = view.rows.iter().find(|r| r.key == "skit collection").unwrap();
    assert!(skit.best_tag.is_none());
    assert_eq!(skit.metadata, None);
}

#[test]
fn every_sort_keeps_every_album() {
    let records = library();
    for option in SortOption::iter() {
        let sorted = sort_records(&records, option);
        assert_eq!(sorted.len(), records.len(), "{option}");
    }
}

#[test]
fn rating_directions_mirror_each_other() {
    let records = library();
    let scored = |option| -> Vec<&str> {
        sort_records(&records, option)
            .into_iter()
            .filter(|(_, r)| !r.rating.is_sentinel())
            .map(|(k, _)| k)
            .collect()
    };

    let mut asc = scored(SortOption::RatingAsc);
    asc.reverse();
    assert_eq!(asc, scored(SortOption::RatingDesc));
}

#[test]
fn artist_pages_rank_by_average() {
    let records = library();
    let mut session = Session::default();
    session.artists_per_page = 2;

    let view = session.artist_view(&records);
    assert_eq!(view.total_pages, 3);
    let names: Vec<&str> = view.artists.iter().map(|(a, _)| a.as_str()).collect();
    assert_eq!(names, vec!["Pink Floyd", "Kendrick Lamar"]);

    session.go_to_artist_page(3);
    let view = session.artist_view(&records);
    // The artist-less skit has no numeric rating and ranks last.
    let (_, last) = view.artists.last().unwrap();
    assert_eq!(last.avg_rating, None);
}

#[test]
fn edit_mode_toggles_without_touching_pages() {
    let mut session = Session::default();
    session.go_to_page(2);
    session.begin_edit();
    assert!(session.edit_mode);
    session.cancel_edit();
    assert!(!session.edit_mode);
    assert_eq!(session.page, 2);
}

#[test]
fn metadata_follows_the_sort_field() {
    use album_engine::session::visible_metadata;
    use models::AlbumRecord;

    let record = AlbumRecord {
        genre: Some("hIP-HOP".to_string()),
        release_date: Some("1994-03-01".to_string()),
        ..common::by("Nas", 9.0)
    };
    assert_eq!(visible_metadata(SortOption::RatingDesc, &record), None);
    assert_eq!(
        visible_metadata(SortOption::ArtistDesc, &record).as_deref(),
        Some("Nas")
    );
    assert_eq!(
        visible_metadata(SortOption::GenreAsc, &record).as_deref(),
        Some("Hip-hop")
    );
    assert_eq!(
        visible_metadata(SortOption::DateAsc, &record).as_deref(),
        Some("March 1, 1994")
    );
}

#[test]
fn page_far_past_the_end_renders_empty() {
    let mut records = models::AlbumCollection::new();
    for n in 0..30 {
        records.insert(format!("album {n:02}"), common::by("Various", 5.0));
    }
    let mut session = Session::default();
    session.go_to_page(usize::MAX);

    let view = session.ratings_view(&records);
    assert!(view.rows.is_empty());
    assert_eq!(view.total_pages, 6);
    assert_eq!(view.next_page, None);
    assert_eq!(
        view.buttons,
        vec![PageButton::Page(1), PageButton::Ellipsis, PageButton::Page(6)]
    );
}
