use std::path::{Path, PathBuf};

use album_engine::distance::DEFAULT_MAX_DISTANCE;
use album_engine::session::{DEFAULT_ALBUMS_PER_PAGE, DEFAULT_ARTISTS_PER_PAGE};
use eyre::WrapErr;
use models::config::AppConfig;

use crate::cli::RootArgs;

pub fn from_env_and_args(args: &RootArgs) -> eyre::Result<AppConfig> {
    from_lookup(args.db_path.clone(), |key| std::env::var(key).ok())
}

/// Build the config from `lookup` instead of the process environment.
pub fn from_lookup<F>(db_path: PathBuf, lookup: F) -> eyre::Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let albums_per_page = positive(&lookup, "ALBUMS_PER_PAGE", DEFAULT_ALBUMS_PER_PAGE)?;
    let artists_per_page = positive(&lookup, "ARTISTS_PER_PAGE", DEFAULT_ARTISTS_PER_PAGE)?;
    let fuzzy_max_distance = match lookup("FUZZY_MAX_DISTANCE") {
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .wrap_err("FUZZY_MAX_DISTANCE must be a non-negative integer")?,
        None => DEFAULT_MAX_DISTANCE,
    };

    Ok(AppConfig {
        db_path,
        albums_per_page,
        artists_per_page,
        fuzzy_max_distance,
    })
}

fn positive<F>(lookup: &F, key: &str, default: usize) -> eyre::Result<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<usize>()
        .wrap_err_with(|| format!("{key} must be a positive integer"))?;
    if value == 0 {
        return Err(eyre::eyre!("{key} must be a positive integer"));
    }
    Ok(value)
}

pub fn ensure_dirs(config: &AppConfig) -> eyre::Result<()> {
    ensure_parent_dir(&config.db_path)
}

fn ensure_parent_dir(path: &Path) -> eyre::Result<()> {
    let Some(parent) = path.parent() else {
        return Err(eyre::eyre!("invalid path: {path:?}"));
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(parent).wrap_err("create parent dir")?;
    Ok(())
}
