use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a product row in a listing
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub brand_slug: Option<String>,
    pub created_at: DateTime<Utc>,
}
