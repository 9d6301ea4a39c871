use clap::Parser;
use eyre::WrapErr;

use album_db::{Catalog, RecordStore, SqliteRecordStore};
use album_engine::analytics::{genre_breakdown, top_decades, top_genres};
use album_engine::search::suggestion_names;
use album_engine::{Resolution, Session};
use album_ratings::cli::{AnalyticsCommand, Command, DbCommand, RateArgs, RootArgs};
use album_ratings::{config, render};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = RootArgs::parse();
    let config = config::from_env_and_args(&args).wrap_err("load config")?;
    config::ensure_dirs(&config).wrap_err("create data directories")?;

    let pool = album_db::connect(&config.db_path)
        .await
        .wrap_err("connect database")?;
    album_db::migrate(&pool)
        .await
        .wrap_err("migrate database")?;

    let catalog =
        Catalog::new(SqliteRecordStore::new(pool)).with_max_distance(config.fuzzy_max_distance);

    match args.command {
        Command::Db {
            command: DbCommand::Init,
        } => {
            println!("db_path={}", config.db_path.display());
        }
        Command::Rate(rate) => {
            rate_album(&catalog, rate).await?;
        }
        Command::Show { name } => match catalog.resolve(&name).await? {
            Resolution::Exact { key } => {
                let records = catalog.records().await?;
                if let Some(record) = records.get(&key) {
                    println!("{}", render::album_detail(&key, record));
                }
            }
            Resolution::Candidates(found) => {
                let records = catalog.records().await?;
                println!("{}", render::candidates(&found, &records));
            }
            Resolution::NotFound { literal } => {
                println!("not_found={literal}");
            }
        },
        Command::Delete { name } => match catalog.delete(&name).await? {
            Some(_) => println!("deleted={}", name.trim()),
            None => println!("not_found={}", name.trim()),
        },
        Command::List { sort, page } => {
            let sort_option = match sort {
                Some(option) => {
                    catalog.set_sort_option(option).await?;
                    option
                }
                None => catalog.sort_option().await?,
            };
            let mut session = Session::from_config(&config, sort_option);
            session.go_to_page(page);

            let records = catalog.records().await?;
            println!("{}", render::ratings_view(&session.ratings_view(&records)));
        }
        Command::Analytics { command } => {
            let records = catalog.records().await?;
            match command {
                AnalyticsCommand::Decades { top } => {
                    let decades = top_decades(&records, top);
                    println!("{}", render::ranked_groups("Top decades", &decades));
                }
                AnalyticsCommand::Genres { top, all } => {
                    if all {
                        let genres = genre_breakdown(&records);
                        println!("{}", render::ranked_groups("Genres", &genres));
                    } else {
                        let genres = top_genres(&records, top);
                        println!("{}", render::ranked_groups("Top genres", &genres));
                    }
                }
                AnalyticsCommand::Artists { page } => {
                    let mut session = Session::from_config(&config, catalog.sort_option().await?);
                    session.go_to_artist_page(page);
                    println!("{}", render::artist_view(&session.artist_view(&records)));
                }
            }
        }
        Command::Suggestions => {
            let records = catalog.records().await?;
            for name in suggestion_names(&records) {
                println!("{name}");
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn rate_album<S: RecordStore>(catalog: &Catalog<S>, args: RateArgs) -> eyre::Result<()> {
    if !args.force {
        match catalog.resolve(&args.name).await? {
            Resolution::Candidates(found) => {
                let records = catalog.records().await?;
                println!("{}", render::candidates(&found, &records));
                return Ok(());
            }
            Resolution::Exact { key } => {
                tracing::info!(album = %key, "updating existing rating");
            }
            Resolution::NotFound { .. } => {}
        }
    }

    let draft = args.into_draft()?;
    let (key, record) = catalog.save(draft).await?;
    println!("saved={key} rating={}", record.rating);
    Ok(())
}
