use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a product category. Categories form a tree via
/// `parent_id` (`None` = root). `hidden_in_brand_view` excludes the
/// category from brand-scoped filtering and keeps its virtual brand
/// pages unfiltered.
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub hidden_in_brand_view: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
