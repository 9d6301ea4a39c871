use album_engine::distance::DEFAULT_MAX_DISTANCE;
use album_engine::{build_record, normalize_key, resolve_with, AlbumDraft, Resolution};
use eyre::WrapErr;
use models::{AlbumCollection, AlbumRecord, SortOption};

use crate::store::RecordStore;

/// Read-modify-write operations over a [`RecordStore`].
///
/// Each mutation loads the full collection, applies one change and writes the
/// whole collection back. Drafts are validated before anything is loaded, so a
/// rejected draft never touches storage.
#[derive(Debug)]
pub struct Catalog<S> {
    store: S,
    max_distance: usize,
}

impl<S: RecordStore> Catalog<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }

    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn records(&self) -> eyre::Result<AlbumCollection> {
        self.store.load_records().await
    }

    /// Look up an album by name, ignoring case and surrounding whitespace.
    pub async fn get(&self, name: &str) -> eyre::Result<Option<AlbumRecord>> {
        let mut records = self.records().await?;
        Ok(records.remove(&normalize_key(name)))
    }

    pub async fn resolve(&self, input: &str) -> eyre::Result<Resolution> {
        let records = self.records().await?;
        let resolution =
            resolve_with(input, &records, self.max_distance).wrap_err("resolve album name")?;
        Ok(resolution)
    }

    /// Validate and store a draft, replacing any album with the same key.
    pub async fn save(&self, draft: AlbumDraft) -> eyre::Result<(String, AlbumRecord)> {
        let (key, record) = build_record(draft).wrap_err("invalid album rating")?;

        let mut records = self.records().await?;
        let replaced = records.insert(key.clone(), record.clone()).is_some();
        self.store.save_records(&records).await?;

        tracing::info!(album = %key, rating = %record.rating, replaced, "saved album rating");
        Ok((key, record))
    }

    /// Remove an album. Unknown keys are a no-op and leave storage untouched.
    pub async fn delete(&self, key: &str) -> eyre::Result<Option<AlbumRecord>> {
        let key = normalize_key(key);
        let mut records = self.records().await?;
        let Some(removed) = records.remove(&key) else {
            tracing::debug!(album = %key, "delete of unknown album ignored");
            return Ok(None);
        };
        self.store.save_records(&records).await?;

        tracing::info!(album = %key, "deleted album rating");
        Ok(Some(removed))
    }

    pub async fn sort_option(&self) -> eyre::Result<SortOption> {
        self.store.load_sort_option().await
    }

    pub async fn set_sort_option(&self, option: SortOption) -> eyre::Result<()> {
        self.store.save_sort_option(option).await?;
        tracing::debug!(sort = option.as_str(), "saved sort option");
        Ok(())
    }
}
