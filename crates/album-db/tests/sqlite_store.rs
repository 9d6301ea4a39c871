use album_db::{connect, migrate, set_app_state, RecordStore, SqliteRecordStore};
use indexmap::IndexMap;
use models::{AlbumCollection, AlbumRecord, Rating, SongEntry, SortOption, SORT_OPTION_KEY};

async fn store() -> (tempfile::TempDir, SqliteRecordStore) {
    let dir = tempfile::tempdir().unwrap();
    let pool = connect(&dir.path().join("ratings.sqlite3")).await.unwrap();
    migrate(&pool).await.unwrap();
    (dir, SqliteRecordStore::new(pool))
}

fn sample() -> AlbumCollection {
    let mut songs = IndexMap::new();
    songs.insert("Song 1".to_string(), SongEntry { rating: Rating::Numeric(8.5) });
    songs.insert("Song 2".to_string(), SongEntry { rating: Rating::Skip });
    songs.insert("Song 3".to_string(), SongEntry { rating: Rating::Interlude });

    let mut records = AlbumCollection::new();
    records.insert(
        "ctrl".to_string(),
        AlbumRecord {
            display_name: Some("Ctrl".to_string()),
            rating: Rating::Numeric(8.12),
            avg_song: 8.5,
            lyricism: 8.0,
            instrumentation: 7.5,
            vibe: 9.0,
            skips: 1,
            songs,
            artist: Some("SZA".to_string()),
            genre: Some("r&b".to_string()),
            release_date: Some("2017-06-09".to_string()),
            cover: Some("https://i.scdn.co/image/ctrl".to_string()),
            spotify_url: Some("https://open.spotify.com/album/76290XdXVF9rPzGdNRWdCh".to_string()),
        },
    );
    records.insert(
        "interludes".to_string(),
        AlbumRecord {
            display_name: None,
            rating: Rating::Interlude,
            avg_song: 5.0,
            lyricism: 5.0,
            instrumentation: 5.0,
            vibe: 5.0,
            skips: 0,
            songs: IndexMap::new(),
            artist: None,
            genre: None,
            release_date: None,
            cover: None,
            spotify_url: None,
        },
    );
    records
}

#[tokio::test]
async fn empty_database_loads_defaults() {
    let (_dir, store) = store().await;
    assert!(store.load_records().await.unwrap().is_empty());
    assert_eq!(store.load_sort_option().await.unwrap(), SortOption::RatingDesc);
}

#[tokio::test]
async fn records_survive_a_roundtrip_field_for_field() {
    let (_dir, store) = store().await;
    let records = sample();

    store.save_records(&records).await.unwrap();
    let loaded = store.load_records().await.unwrap();

    assert_eq!(loaded, records);
    let songs: Vec<&str> = loaded["ctrl"].songs.keys().map(String::as_str).collect();
    assert_eq!(songs, vec!["Song 1", "Song 2", "Song 3"]);
}

#[tokio::test]
async fn sort_option_is_remembered() {
    let (_dir, store) = store().await;
    store.save_sort_option(SortOption::GenreAsc).await.unwrap();
    assert_eq!(store.load_sort_option().await.unwrap(), SortOption::GenreAsc);
}

#[tokio::test]
async fn unknown_stored_sort_option_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let pool = connect(&dir.path().join("ratings.sqlite3")).await.unwrap();
    migrate(&pool).await.unwrap();
    set_app_state(&pool, SORT_OPTION_KEY, "byMood", 1).await.unwrap();

    let store = SqliteRecordStore::new(pool);
    assert_eq!(store.load_sort_option().await.unwrap(), SortOption::RatingDesc);
}
