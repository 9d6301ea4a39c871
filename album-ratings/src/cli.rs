use std::path::PathBuf;

use album_engine::scoring::{parse_score, songs_from_tokens, Exemption};
use album_engine::{AlbumDraft, AverageSource};
use clap::{Args, Parser, Subcommand};
use models::SortOption;

#[derive(Debug, Parser)]
#[command(name = "album-ratings")]
#[command(about = "Rate albums and browse your collection")]
#[command(arg_required_else_help = true)]
pub struct RootArgs {
    #[arg(
        long,
        default_value = "data/album_ratings.sqlite3",
        value_name = "FILE",
        help = "Path to SQLite database file"
    )]
    pub db_path: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(about = "Rate an album, or re-rate one that is already saved")]
    Rate(RateArgs),
    #[command(about = "Show a saved album, or the closest matches for a name")]
    Show {
        #[arg(value_name = "NAME")]
        name: String,
    },
    #[command(about = "Delete a saved album")]
    Delete {
        #[arg(value_name = "NAME")]
        name: String,
    },
    #[command(about = "List saved albums one page at a time")]
    List {
        #[arg(
            long,
            value_name = "OPTION",
            help = "Sort option such as ratingDesc, artistAsc or dateDesc (remembered)"
        )]
        sort: Option<SortOption>,

        #[arg(long, default_value_t = 1, value_name = "N", help = "Page number (1-based)")]
        page: usize,
    },
    #[command(about = "Collection statistics")]
    Analytics {
        #[command(subcommand)]
        command: AnalyticsCommand,
    },
    #[command(about = "Print every saved album name (for shell completion)")]
    Suggestions,
    #[command(about = "Initialize the SQLite database")]
    Db {
        #[command(subcommand)]
        command: DbCommand,
    },
}

#[derive(Debug, Args)]
pub struct RateArgs {
    #[arg(value_name = "NAME", help = "Album name")]
    pub name: String,

    #[arg(
        long,
        value_name = "1..10",
        required_unless_present = "songs",
        conflicts_with = "songs",
        help = "Average song score"
    )]
    pub avg: Option<String>,

    #[arg(
        long,
        value_name = "TOKENS",
        value_delimiter = ',',
        help = "Per-song ratings in track order, e.g. 8,9.5,S,I,7 (S = skip, I = interlude)"
    )]
    pub songs: Option<Vec<String>>,

    #[arg(long, value_name = "1..10")]
    pub lyricism: String,

    #[arg(long, value_name = "1..10")]
    pub instrumentation: String,

    #[arg(long, value_name = "1..10")]
    pub vibe: String,

    #[arg(
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        value_name = "N",
        help = "Skipped songs (ignored with --songs)"
    )]
    pub skips: i64,

    #[arg(long, conflicts_with = "interlude", help = "Store the album as skipped")]
    pub skip: bool,

    #[arg(long, help = "Store the album as an interlude")]
    pub interlude: bool,

    #[arg(long)]
    pub artist: Option<String>,

    #[arg(long)]
    pub genre: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD")]
    pub release_date: Option<String>,

    #[arg(long, value_name = "URL")]
    pub cover: Option<String>,

    #[arg(long, value_name = "URL")]
    pub spotify_url: Option<String>,

    #[arg(
        long,
        help = "Save under NAME even when it looks like an existing album"
    )]
    pub force: bool,
}

impl RateArgs {
    /// Score fields are parsed here, so errors name the offending field.
    pub fn into_draft(self) -> eyre::Result<AlbumDraft> {
        let average = match (self.songs, self.avg) {
            (Some(tokens), _) => AverageSource::Songs(songs_from_tokens(&tokens)?),
            (None, Some(avg)) => AverageSource::Manual(parse_score("avgSong", &avg)?),
            (None, None) => return Err(eyre::eyre!("either --avg or --songs is required")),
        };
        let exemption = if self.skip {
            Some(Exemption::Skip)
        } else if self.interlude {
            Some(Exemption::Interlude)
        } else {
            None
        };

        Ok(AlbumDraft {
            lyricism: parse_score("lyricism", &self.lyricism)?,
            instrumentation: parse_score("instrumentation", &self.instrumentation)?,
            vibe: parse_score("vibe", &self.vibe)?,
            skips: self.skips,
            exemption,
            artist: self.artist,
            genre: self.genre,
            release_date: self.release_date,
            cover: self.cover,
            spotify_url: self.spotify_url,
            ..AlbumDraft::new(self.name, average)
        })
    }
}

#[derive(Debug, Subcommand)]
pub enum AnalyticsCommand {
    #[command(about = "Best decades by average rating")]
    Decades {
        #[arg(long, default_value_t = album_engine::analytics::DEFAULT_TOP_N, value_name = "N")]
        top: usize,
    },
    #[command(about = "Best genres, or every genre with --all")]
    Genres {
        #[arg(long, default_value_t = album_engine::analytics::DEFAULT_TOP_N, value_name = "N")]
        top: usize,

        #[arg(long, help = "List every genre by album count")]
        all: bool,
    },
    #[command(about = "Artists ranked by average rating")]
    Artists {
        #[arg(long, default_value_t = 1, value_name = "N", help = "Page number (1-based)")]
        page: usize,
    },
}

#[derive(Debug, Subcommand)]
pub enum DbCommand {
    #[command(about = "Create DB file and run migrations")]
    Init,
}
