use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub albums_per_page: usize,
    pub artists_per_page: usize,
    pub fuzzy_max_distance: usize,
}
