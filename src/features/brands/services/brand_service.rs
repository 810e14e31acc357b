use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::brands::dtos::BrandResponseDto;
use crate::features::brands::models::Brand;

/// Service for brand lookups
pub struct BrandService {
    pool: PgPool,
}

impl BrandService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all brands
    pub async fn list(&self) -> Result<Vec<BrandResponseDto>> {
        let brands = sqlx::query_as::<_, Brand>(
            r#"
            SELECT slug, name, created_at
            FROM brands
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list brands: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(brands.into_iter().map(|b| b.into()).collect())
    }

    /// Get brand by slug, 404 when unknown
    pub async fn get_by_slug(&self, slug: &str) -> Result<BrandResponseDto> {
        self.find_by_slug(slug)
            .await?
            .map(|b| b.into())
            .ok_or_else(|| AppError::NotFound(format!("Brand '{}' not found", slug)))
    }

    /// Resolve a brand slug to its record; `None` when unknown.
    ///
    /// Storefront callers treat an unresolved brand as a silent no-op,
    /// so this variant does not raise.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Brand>> {
        let brand = sqlx::query_as::<_, Brand>(
            r#"
            SELECT slug, name, created_at
            FROM brands
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get brand by slug: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(brand)
    }
}
