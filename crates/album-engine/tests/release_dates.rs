use album_engine::analytics::{decade_stats, group_by_artist};
use album_engine::sort_records;
use album_engine::sorting::BestTags;
use models::{AlbumCollection, AlbumRecord, Rating, SortOption};

fn dated(artist: &str, rating: f64, date: &str) -> AlbumRecord {
    AlbumRecord {
        display_name: None,
        rating: Rating::Numeric(rating),
        avg_song: 7.0,
        lyricism: 7.0,
        instrumentation: 7.0,
        vibe: 7.0,
        skips: 0,
        songs: Default::default(),
        artist: Some(artist.to_string()),
        genre: None,
        release_date: Some(date.to_string()),
        cover: None,
        spotify_url: None,
    }
}

fn collection() -> AlbumCollection {
    let mut c = AlbumCollection::new();
    c.insert("aquemini".into(), dated("OutKast", 9.1, "1998"));
    c.insert("atliens".into(), dated("OutKast", 8.4, "1996-08-27"));
    c.insert("stankonia".into(), dated("OutKast", 8.8, "2000-10-31"));
    c.insert("blonde".into(), dated("Frank Ocean", 9.0, "2016-08-20"));
    c
}

fn keys(option: SortOption, records: &AlbumCollection) -> Vec<&str> {
    sort_records(records, option).into_iter().map(|(k, _)| k).collect()
}

#[test]
fn bare_year_is_the_same_year_everywhere() {
    let c = collection();

    assert_eq!(
        keys(SortOption::DateAsc, &c),
        vec!["atliens", "aquemini", "stankonia", "blonde"]
    );
    assert_eq!(
        keys(SortOption::DateDesc, &c),
        vec!["blonde", "stankonia", "aquemini", "atliens"]
    );

    let decades = decade_stats(&c);
    assert_eq!(decades["1990s"].count, 2);

    let sorted = sort_records(&c, SortOption::DateAsc);
    let tags = BestTags::compute(sorted.iter().copied(), SortOption::DateAsc);
    assert_eq!(tags.best_in_group("1990s"), Some("aquemini"));

    let outkast = &group_by_artist(&c)["OutKast"];
    let order: Vec<&str> = outkast.albums.iter().map(|a| a.key.as_str()).collect();
    assert_eq!(order, vec!["atliens", "aquemini", "stankonia"]);
}
