use std::sync::Arc;

use chrono::{FixedOffset, Utc};
use lazy_static::lazy_static;
use serde_json::Value;

use crate::core::error::{AppError, Result};
use crate::features::overrides::models::{OverrideKey, OverrideRecord};
use crate::modules::settings::SettingsStore;
use crate::shared::constants::{OVERRIDE_INDEX_KEY, OVERRIDE_MODIFIED_KEY};

lazy_static! {
    /// Shop-local fixed offset (CET) used for the modification stamp
    static ref STAMP_OFFSET: FixedOffset = FixedOffset::east_opt(3600).unwrap();
}

/// CRUD over the override data set in the settings store.
///
/// Invariant: the index under `_nt_cat_man_contents` lists exactly the
/// storage keys of existing override records, in insertion order.
/// Writes are last-writer-wins; concurrent edits of the same key race
/// silently.
pub struct OverrideService {
    store: Arc<dyn SettingsStore>,
}

impl OverrideService {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// All override keys, in index order. Index entries that do not
    /// parse as override keys are skipped.
    pub async fn list_keys(&self) -> Result<Vec<OverrideKey>> {
        Ok(self
            .read_index()
            .await?
            .iter()
            .filter_map(|k| OverrideKey::parse(k))
            .collect())
    }

    /// Read one override record; `None` when the pair has no record
    pub async fn get(&self, key: &OverrideKey) -> Result<Option<OverrideRecord>> {
        let value = self.store.get(&key.storage_key()).await?;

        match value {
            Some(v) => {
                let record = serde_json::from_value(v).map_err(|e| {
                    AppError::Internal(format!(
                        "Malformed override record at '{}': {}",
                        key.storage_key(),
                        e
                    ))
                })?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    /// Create a new override record, append its key to the index and
    /// stamp the modification timestamp. Conflict when the pair
    /// already has a record.
    pub async fn create(&self, key: &OverrideKey, record: OverrideRecord) -> Result<()> {
        let storage_key = key.storage_key();
        if self.store.get(&storage_key).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Override '{}' already exists",
                storage_key
            )));
        }

        self.store
            .set(&storage_key, serde_json::to_value(&record).unwrap_or(Value::Null))
            .await?;

        let mut index = self.read_index().await?;
        if !index.contains(&storage_key) {
            index.push(storage_key.clone());
        }
        self.write_index(index).await?;
        self.stamp_modified().await?;

        tracing::info!("Override created: {}", storage_key);

        Ok(())
    }

    /// Overwrite the fields of an existing override record and re-stamp
    /// the modification timestamp. The key is the location; it is never
    /// re-derived from the submitted fields.
    pub async fn update(&self, key: &OverrideKey, record: OverrideRecord) -> Result<()> {
        let storage_key = key.storage_key();
        if self.store.get(&storage_key).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Override '{}' not found",
                storage_key
            )));
        }

        self.store
            .set(&storage_key, serde_json::to_value(&record).unwrap_or(Value::Null))
            .await?;
        self.stamp_modified().await?;

        tracing::info!("Override updated: {}", storage_key);

        Ok(())
    }

    /// Delete an override record and drop its key from the index,
    /// preserving the order of the remaining keys.
    pub async fn delete(&self, key: &OverrideKey) -> Result<()> {
        let storage_key = key.storage_key();
        if self.store.get(&storage_key).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Override '{}' not found",
                storage_key
            )));
        }

        self.store.delete(&storage_key).await?;

        let index: Vec<String> = self
            .read_index()
            .await?
            .into_iter()
            .filter(|k| k != &storage_key)
            .collect();
        self.write_index(index).await?;

        tracing::info!("Override deleted: {}", storage_key);

        Ok(())
    }

    /// Timestamp of the last create/edit, RFC 3339; `None` before the
    /// first write
    pub async fn last_modified(&self) -> Result<Option<String>> {
        Ok(self
            .store
            .get(OVERRIDE_MODIFIED_KEY)
            .await?
            .and_then(|v| v.as_str().map(|s| s.to_string())))
    }

    async fn read_index(&self) -> Result<Vec<String>> {
        let value = self.store.get(OVERRIDE_INDEX_KEY).await?;

        let keys = match value {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|v| v.as_str().map(|s| s.to_string()))
                .collect(),
            _ => Vec::new(),
        };

        Ok(keys)
    }

    async fn write_index(&self, keys: Vec<String>) -> Result<()> {
        self.store
            .set(OVERRIDE_INDEX_KEY, Value::from(keys))
            .await
    }

    async fn stamp_modified(&self) -> Result<()> {
        let now = Utc::now().with_timezone(&*STAMP_OFFSET);
        self.store
            .set(OVERRIDE_MODIFIED_KEY, Value::from(now.to_rfc3339()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::settings::InMemorySettingsStore;

    fn service() -> OverrideService {
        OverrideService::new(Arc::new(InMemorySettingsStore::new()))
    }

    fn record(title: &str) -> OverrideRecord {
        OverrideRecord {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_get_missing_record_is_none() {
        let svc = service();
        let key = OverrideKey::new("nike", 5);

        assert_eq!(svc.get(&key).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_persists_record_and_indexes_key() {
        let svc = service();
        let key = OverrideKey::new("nike", 5);

        svc.create(&key, record("Nike Shoes")).await.unwrap();

        assert_eq!(svc.get(&key).await.unwrap(), Some(record("Nike Shoes")));
        assert_eq!(svc.list_keys().await.unwrap(), vec![key]);
        assert!(svc.last_modified().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_create_existing_key_conflicts() {
        let svc = service();
        let key = OverrideKey::new("nike", 5);

        svc.create(&key, record("a")).await.unwrap();
        let err = svc.create(&key, record("b")).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        // first write kept
        assert_eq!(svc.get(&key).await.unwrap(), Some(record("a")));
    }

    #[tokio::test]
    async fn test_update_overwrites_at_key_and_restamps() {
        let svc = service();
        let key = OverrideKey::new("nike", 5);

        svc.create(&key, record("old")).await.unwrap();
        svc.update(&key, record("new")).await.unwrap();

        assert_eq!(svc.get(&key).await.unwrap(), Some(record("new")));
        // edit does not grow the index
        assert_eq!(svc.list_keys().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_key_is_not_found() {
        let svc = service();
        let err = svc
            .update(&OverrideKey::new("nike", 5), record("x"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_key_and_preserves_index_order() {
        let svc = service();
        let a = OverrideKey::new("nike", 1);
        let b = OverrideKey::new("adidas", 2);
        let c = OverrideKey::new("puma", 3);
        svc.create(&a, record("a")).await.unwrap();
        svc.create(&b, record("b")).await.unwrap();
        svc.create(&c, record("c")).await.unwrap();

        svc.delete(&b).await.unwrap();

        assert_eq!(svc.get(&b).await.unwrap(), None);
        assert_eq!(svc.list_keys().await.unwrap(), vec![a, c]);
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_not_found() {
        let svc = service();
        let err = svc.delete(&OverrideKey::new("nike", 5)).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_stamp_is_fixed_offset_rfc3339() {
        let svc = service();
        svc.create(&OverrideKey::new("nike", 5), record("x"))
            .await
            .unwrap();

        let stamp = svc.last_modified().await.unwrap().unwrap();
        assert!(stamp.ends_with("+01:00"));
    }

    #[tokio::test]
    async fn test_index_skips_foreign_entries() {
        let store = Arc::new(InMemorySettingsStore::new());
        store
            .set(
                OVERRIDE_INDEX_KEY,
                serde_json::json!(["_nt_man_nike_5", "garbage", 42]),
            )
            .await
            .unwrap();
        let svc = OverrideService::new(store);

        assert_eq!(
            svc.list_keys().await.unwrap(),
            vec![OverrideKey::new("nike", 5)]
        );
    }
}
