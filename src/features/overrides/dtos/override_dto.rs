use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::overrides::models::{OverrideKey, OverrideRecord};
use crate::shared::validation::SLUG_REGEX;

/// One entry of the override list view
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OverrideListItemDto {
    /// Settings-store key of the record
    pub key: String,
    pub brand_slug: String,
    /// Brand display name; falls back to the slug when the brand
    /// record no longer exists
    pub brand_name: String,
    pub category_id: i64,
    /// Composed hierarchical category name ("Shoes > Running")
    pub category_path: String,
}

/// List view payload: entries plus the shared modification stamp
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OverrideListDto {
    pub items: Vec<OverrideListItemDto>,
    /// RFC 3339 timestamp of the last create/edit, if any
    pub last_modified: Option<String>,
}

/// Detail view of one override record
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OverrideDetailDto {
    pub key: String,
    pub brand_slug: String,
    pub category_id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub bottom_title: Option<String>,
    pub bottom_description: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl OverrideDetailDto {
    pub fn from_parts(key: &OverrideKey, record: OverrideRecord) -> Self {
        Self {
            key: key.storage_key(),
            brand_slug: key.brand_slug.clone(),
            category_id: key.category_id,
            title: record.title,
            description: record.description,
            bottom_title: record.bottom_title,
            bottom_description: record.bottom_description,
            seo_title: record.seo_title,
            seo_description: record.seo_description,
        }
    }
}

/// Request DTO for creating an override record
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateOverrideDto {
    #[validate(
        length(min = 1, max = 190, message = "Brand slug must be 1-190 characters"),
        regex(path = *SLUG_REGEX, message = "Brand slug must be a lowercase slug")
    )]
    pub brand_slug: String,

    pub category_id: i64,

    #[serde(flatten)]
    pub fields: OverrideFieldsDto,
}

/// Request DTO for editing an existing override record. The record
/// location stays the key in the URL; submitted fields replace the
/// stored fields wholesale.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateOverrideDto {
    #[serde(flatten)]
    pub fields: OverrideFieldsDto,
}

/// The override record fields as submitted by the admin UI. All
/// optional; blank submissions intentionally create blank overrides.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct OverrideFieldsDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub bottom_title: Option<String>,
    pub bottom_description: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl From<OverrideFieldsDto> for OverrideRecord {
    fn from(dto: OverrideFieldsDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            bottom_title: dto.bottom_title,
            bottom_description: dto.bottom_description,
            seo_title: dto.seo_title,
            seo_description: dto.seo_description,
        }
    }
}
