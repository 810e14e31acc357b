use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a brand (manufacturer). The slug is the identifier.
#[derive(Debug, Clone, FromRow)]
pub struct Brand {
    pub slug: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
