use std::collections::HashMap;

use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryResponseDto, CategoryTreeDto};
use crate::features::categories::models::Category;
use crate::shared::constants::{CATEGORY_PATH_SEPARATOR, MAX_CATEGORY_DEPTH};

/// Service for category operations
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all categories (flat list)
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.fetch_all().await?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// List all categories as tree structure
    pub async fn list_tree(&self) -> Result<Vec<CategoryTreeDto>> {
        let categories = self.fetch_all().await?;

        Ok(CategoryTreeDto::build_tree(categories))
    }

    /// Get category by slug, 404 when unknown
    pub async fn get_by_slug(&self, slug: &str) -> Result<CategoryResponseDto> {
        self.find_by_slug(slug)
            .await?
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", slug)))
    }

    /// Resolve a category slug to its record; `None` when unknown.
    ///
    /// Storefront callers treat an unresolved category as "not our
    /// route", so this variant does not raise.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, parent_id, name, slug, description, hidden_in_brand_view, created_at, updated_at
            FROM categories
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category by slug: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(category)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, parent_id, name, slug, description, hidden_in_brand_view, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category by id: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(category)
    }

    /// Hierarchical display name for a category id, ancestors first:
    /// `"Shoes > Running"`. 404 when the id is unknown.
    pub async fn display_path_by_id(&self, id: i64) -> Result<String> {
        let category = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

        self.display_path_for(&category).await
    }

    /// Hierarchical display name for an already-loaded category record
    pub async fn display_path_for(&self, category: &Category) -> Result<String> {
        let by_id: HashMap<i64, Category> = self
            .fetch_all()
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        compose_display_path(category, &by_id)
    }

    /// Ancestor chain for a category, most distant ancestor first,
    /// ending with the category itself. Used for breadcrumb trails.
    pub async fn ancestor_chain(&self, category: &Category) -> Result<Vec<Category>> {
        let by_id: HashMap<i64, Category> = self
            .fetch_all()
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let mut chain = vec![category.clone()];
        let mut current = category.clone();
        while let Some(parent_id) = current.parent_id {
            if chain.len() > MAX_CATEGORY_DEPTH {
                return Err(AppError::Internal(format!(
                    "Category hierarchy exceeds depth {} at id {}",
                    MAX_CATEGORY_DEPTH, category.id
                )));
            }
            match by_id.get(&parent_id) {
                Some(parent) => {
                    chain.push(parent.clone());
                    current = parent.clone();
                }
                None => break,
            }
        }
        chain.reverse();

        Ok(chain)
    }

    /// Set the hidden-in-brand-view flag, 404 when the id is unknown
    pub async fn set_brand_visibility(&self, id: i64, hidden: bool) -> Result<CategoryResponseDto> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET hidden_in_brand_view = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING id, parent_id, name, slug, description, hidden_in_brand_view, created_at, updated_at
            "#,
        )
        .bind(hidden)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update category visibility: {:?}", e);
            AppError::Database(e)
        })?;

        category
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    async fn fetch_all(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, parent_id, name, slug, description, hidden_in_brand_view, created_at, updated_at
            FROM categories
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories)
    }
}

/// Join ancestor names with `" > "`, most distant ancestor first.
///
/// The walk is bounded: a corrupted cyclic parent chain errors out
/// instead of recursing forever. A dangling parent reference ends the
/// walk at the last resolvable ancestor.
pub fn compose_display_path(
    category: &Category,
    by_id: &HashMap<i64, Category>,
) -> Result<String> {
    let mut names = vec![category.name.clone()];
    let mut current = category;
    while let Some(parent_id) = current.parent_id {
        if names.len() > MAX_CATEGORY_DEPTH {
            return Err(AppError::Internal(format!(
                "Category hierarchy exceeds depth {} at id {}",
                MAX_CATEGORY_DEPTH, category.id
            )));
        }
        match by_id.get(&parent_id) {
            Some(parent) => {
                names.push(parent.name.clone());
                current = parent;
            }
            None => break,
        }
    }
    names.reverse();

    Ok(names.join(CATEGORY_PATH_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::test_category;

    fn lookup(categories: Vec<Category>) -> HashMap<i64, Category> {
        categories.into_iter().map(|c| (c.id, c)).collect()
    }

    #[test]
    fn test_display_path_root_category() {
        let shoes = test_category(5, None, "Shoes", "shoes");
        let by_id = lookup(vec![shoes.clone()]);

        assert_eq!(compose_display_path(&shoes, &by_id).unwrap(), "Shoes");
    }

    #[test]
    fn test_display_path_child_category() {
        let shoes = test_category(5, None, "Shoes", "shoes");
        let running = test_category(6, Some(5), "Running", "running");
        let by_id = lookup(vec![shoes, running.clone()]);

        assert_eq!(
            compose_display_path(&running, &by_id).unwrap(),
            "Shoes > Running"
        );
    }

    #[test]
    fn test_display_path_three_levels() {
        let shoes = test_category(5, None, "Shoes", "shoes");
        let running = test_category(6, Some(5), "Running", "running");
        let trail = test_category(7, Some(6), "Trail", "trail");
        let by_id = lookup(vec![shoes, running, trail.clone()]);

        assert_eq!(
            compose_display_path(&trail, &by_id).unwrap(),
            "Shoes > Running > Trail"
        );
    }

    #[test]
    fn test_display_path_dangling_parent_stops() {
        let orphan = test_category(9, Some(999), "Orphan", "orphan");
        let by_id = lookup(vec![orphan.clone()]);

        assert_eq!(compose_display_path(&orphan, &by_id).unwrap(), "Orphan");
    }

    #[test]
    fn test_display_path_cycle_is_rejected() {
        let a = test_category(1, Some(2), "A", "a");
        let b = test_category(2, Some(1), "B", "b");
        let by_id = lookup(vec![a.clone(), b]);

        assert!(compose_display_path(&a, &by_id).is_err());
    }
}
