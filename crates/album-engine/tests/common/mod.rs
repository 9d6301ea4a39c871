#![allow(dead_code)]

use models::{AlbumCollection, AlbumRecord, Rating};

pub fn album(rating: Rating) -> AlbumRecord {
    AlbumRecord {
        display_name: None,
        rating,
        avg_song: 7.0,
        lyricism: 7.0,
        instrumentation: 7.0,
        vibe: 7.0,
        skips: 0,
        songs: Default::default(),
        artist: None,
        genre: None,
        release_date: None,
        cover: None,
        spotify_url: None,
    }
}

pub fn by(artist: &str, rating: f64) -> AlbumRecord {
    AlbumRecord {
        artist: Some(artist.to_string()),
        ..album(Rating::Numeric(rating))
    }
}

pub fn library() -> AlbumCollection {
    let mut c = AlbumCollection::new();
    c.insert("to pimp a butterfly".into(), by("Kendrick Lamar", 9.6));
    c.insert("damn".into(), by("Kendrick Lamar", 8.7));
    c.insert("blonde".into(), by("Frank Ocean", 9.2));
    c.insert("blond".into(), by("Frank Ocean", 8.1));
    c.insert("yeezus".into(), by("Kanye", 7.4));
    c.insert("graduation".into(), by("Kanye", 8.3));
    c.insert(
        "the dark side of the moon".into(),
        AlbumRecord {
            display_name: Some("The Dark Side of the Moon".into()),
            ..by("Pink Floyd", 9.8)
        },
    );
    c.insert("skit collection".into(), album(Rating::Skip));
    c
}
