use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::storefront::models::Product;
use crate::features::storefront::query::ListingQuery;

/// Translates parsed listing queries into product rows
pub struct ListingService {
    pool: PgPool,
}

impl ListingService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch one page of products for the query
    pub async fn list(&self, query: &ListingQuery) -> Result<Vec<Product>> {
        let products = match query.brand_terms() {
            Some(brand_slugs) => {
                sqlx::query_as::<_, Product>(
                    r#"
                    SELECT p.id, p.name, p.slug, p.brand_slug, p.created_at
                    FROM products p
                    JOIN product_categories pc ON pc.product_id = p.id
                    WHERE pc.category_id = $1 AND p.brand_slug = ANY($2)
                    ORDER BY p.name, p.id
                    LIMIT $3 OFFSET $4
                    "#,
                )
                .bind(query.category_id)
                .bind(brand_slugs)
                .bind(query.limit())
                .bind(query.offset())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Product>(
                    r#"
                    SELECT p.id, p.name, p.slug, p.brand_slug, p.created_at
                    FROM products p
                    JOIN product_categories pc ON pc.product_id = p.id
                    WHERE pc.category_id = $1
                    ORDER BY p.name, p.id
                    LIMIT $2 OFFSET $3
                    "#,
                )
                .bind(query.category_id)
                .bind(query.limit())
                .bind(query.offset())
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| {
            tracing::error!("Failed to list products: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(products)
    }

    /// Total product count for the query, for pagination links
    pub async fn count(&self, query: &ListingQuery) -> Result<i64> {
        let total: i64 = match query.brand_terms() {
            Some(brand_slugs) => {
                sqlx::query_scalar(
                    r#"
                    SELECT COUNT(*)
                    FROM products p
                    JOIN product_categories pc ON pc.product_id = p.id
                    WHERE pc.category_id = $1 AND p.brand_slug = ANY($2)
                    "#,
                )
                .bind(query.category_id)
                .bind(brand_slugs)
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_scalar(
                    r#"
                    SELECT COUNT(*)
                    FROM products p
                    JOIN product_categories pc ON pc.product_id = p.id
                    WHERE pc.category_id = $1
                    "#,
                )
                .bind(query.category_id)
                .fetch_one(&self.pool)
                .await
            }
        }
        .map_err(|e| {
            tracing::error!("Failed to count products: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(total)
    }
}
