use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use eyre::WrapErr;
use models::{AlbumCollection, AlbumRecord, SortOption, RECORDS_KEY, SORT_OPTION_KEY};

use crate::{get_app_state, set_app_state, SqlitePool};

/// Whole-collection persistence plus the remembered sort preference.
///
/// Every write replaces the stored collection; there are no partial updates.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    async fn load_records(&self) -> eyre::Result<AlbumCollection>;
    async fn save_records(&self, records: &AlbumCollection) -> eyre::Result<()>;
    async fn load_sort_option(&self) -> eyre::Result<SortOption>;
    async fn save_sort_option(&self, option: SortOption) -> eyre::Result<()>;
}

#[derive(Debug, Clone)]
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RecordStore for SqliteRecordStore {
    async fn load_records(&self) -> eyre::Result<AlbumCollection> {
        let raw = get_app_state(&self.pool, RECORDS_KEY)
            .await
            .wrap_err("load album ratings")?;
        decode_records(raw.as_deref())
    }

    async fn save_records(&self, records: &AlbumCollection) -> eyre::Result<()> {
        let json = serde_json::to_string(records).wrap_err("serialize album ratings")?;
        set_app_state(&self.pool, RECORDS_KEY, &json, unixtime_now())
            .await
            .wrap_err("save album ratings")?;
        tracing::debug!(albums = records.len(), "saved album ratings");
        Ok(())
    }

    async fn load_sort_option(&self) -> eyre::Result<SortOption> {
        let raw = get_app_state(&self.pool, SORT_OPTION_KEY)
            .await
            .wrap_err("load sort option")?;
        Ok(decode_sort_option(raw.as_deref()))
    }

    async fn save_sort_option(&self, option: SortOption) -> eyre::Result<()> {
        set_app_state(&self.pool, SORT_OPTION_KEY, option.as_str(), unixtime_now())
            .await
            .wrap_err("save sort option")
    }
}

/// Keeps the stored documents in memory, encoded the same way the SQLite
/// store encodes them.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    slots: Mutex<HashMap<&'static str, String>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot with a raw stored value, as if written by another client.
    pub fn with_raw(self, key: &'static str, value: impl Into<String>) -> eyre::Result<Self> {
        self.put(key, value.into())?;
        Ok(self)
    }

    fn get(&self, key: &str) -> eyre::Result<Option<String>> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| eyre::eyre!("memory store lock poisoned"))?;
        Ok(slots.get(key).cloned())
    }

    fn put(&self, key: &'static str, value: String) -> eyre::Result<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| eyre::eyre!("memory store lock poisoned"))?;
        slots.insert(key, value);
        Ok(())
    }
}

impl RecordStore for MemoryRecordStore {
    async fn load_records(&self) -> eyre::Result<AlbumCollection> {
        decode_records(self.get(RECORDS_KEY)?.as_deref())
    }

    async fn save_records(&self, records: &AlbumCollection) -> eyre::Result<()> {
        let json = serde_json::to_string(records).wrap_err("serialize album ratings")?;
        self.put(RECORDS_KEY, json)
    }

    async fn load_sort_option(&self) -> eyre::Result<SortOption> {
        Ok(decode_sort_option(self.get(SORT_OPTION_KEY)?.as_deref()))
    }

    async fn save_sort_option(&self, option: SortOption) -> eyre::Result<()> {
        self.put(SORT_OPTION_KEY, option.as_str().to_string())
    }
}

/// Decode the stored collection. A record that fails to decode is reported
/// by its key.
fn decode_records(raw: Option<&str>) -> eyre::Result<AlbumCollection> {
    let Some(json) = raw else {
        return Ok(AlbumCollection::new());
    };
    let entries: BTreeMap<String, serde_json::Value> =
        serde_json::from_str(json).wrap_err("parse album ratings")?;

    entries
        .into_iter()
        .map(|(key, value)| -> eyre::Result<(String, AlbumRecord)> {
            let record: AlbumRecord = serde_json::from_value(value)
                .wrap_err_with(|| format!("parse album ratings: album {key:?}"))?;
            Ok((key, record))
        })
        .collect()
}

fn decode_sort_option(raw: Option<&str>) -> SortOption {
    let Some(raw) = raw else {
        return SortOption::default();
    };
    match raw.parse::<SortOption>() {
        Ok(option) => option,
        Err(_) => {
            tracing::warn!(stored = raw, "unknown sort option, using default");
            SortOption::default()
        }
    }
}

fn unixtime_now() -> i64 {
    chrono::Utc::now().timestamp()
}
