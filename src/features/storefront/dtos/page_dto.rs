use serde::Serialize;
use utoipa::ToSchema;

use crate::features::brands::dtos::BrandResponseDto;
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::storefront::breadcrumbs::Crumb;
use crate::features::storefront::models::Product;
use crate::features::storefront::pipeline::{PageContext, SeoMetadata};

/// Product row of a listing page
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductSummaryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub brand_slug: Option<String>,
}

impl From<Product> for ProductSummaryDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            slug: p.slug,
            brand_slug: p.brand_slug,
        }
    }
}

/// Head metadata block of a storefront page
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SeoMetadataDto {
    pub title: String,
    pub description: Option<String>,
    pub canonical: Option<String>,
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
}

impl From<SeoMetadata> for SeoMetadataDto {
    fn from(seo: SeoMetadata) -> Self {
        Self {
            title: seo.title,
            description: seo.description,
            canonical: seo.canonical,
            prev_url: seo.prev_url,
            next_url: seo.next_url,
        }
    }
}

/// A rendered (possibly brand-scoped) category listing page
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StorefrontPageDto {
    pub title: String,
    /// Intro text above the listing; brand pages show the override
    /// text on the first page only
    pub archive_description: Option<String>,
    pub bottom_title: Option<String>,
    pub bottom_description: Option<String>,
    pub category: CategoryResponseDto,
    pub brand: Option<BrandResponseDto>,
    /// 0 = unpaged first page
    pub page: u32,
    pub total_products: i64,
    pub products: Vec<ProductSummaryDto>,
    pub breadcrumbs: Vec<Crumb>,
    pub seo: SeoMetadataDto,
}

impl StorefrontPageDto {
    pub fn from_context(ctx: PageContext, products: Vec<Product>, total_products: i64) -> Self {
        Self {
            title: ctx.page_title,
            archive_description: ctx.archive_description,
            bottom_title: ctx.bottom_title,
            bottom_description: ctx.bottom_description,
            category: ctx.category.into(),
            brand: ctx.brand.map(|b| b.into()),
            page: ctx.page,
            total_products,
            products: products.into_iter().map(|p| p.into()).collect(),
            breadcrumbs: ctx.breadcrumbs,
            seo: ctx.seo.into(),
        }
    }
}
