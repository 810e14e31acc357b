use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::brands::models::Brand;

/// Response DTO for a brand
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BrandResponseDto {
    pub slug: String,
    pub name: String,
}

impl From<Brand> for BrandResponseDto {
    fn from(b: Brand) -> Self {
        Self {
            slug: b.slug,
            name: b.name,
        }
    }
}
