use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::modules::settings::store::SettingsStore;

/// Postgres-backed settings store over the `site_settings` key/value table
pub struct PgSettingsStore {
    pool: PgPool,
}

impl PgSettingsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsStore for PgSettingsStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let value: Option<Value> =
            sqlx::query_scalar("SELECT value FROM site_settings WHERE key = $1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to read setting '{}': {:?}", key, e);
                    AppError::Database(e)
                })?;

        Ok(value)
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO site_settings (key, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to write setting '{}': {:?}", key, e);
            AppError::Database(e)
        })?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM site_settings WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete setting '{}': {:?}", key, e);
                AppError::Database(e)
            })?;

        Ok(())
    }
}
