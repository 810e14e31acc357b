use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::brands::{dtos as brands_dtos, handlers as brands_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::overrides::{dtos as overrides_dtos, handlers as overrides_handlers};
use crate::features::storefront::breadcrumbs::Crumb;
use crate::features::storefront::{dtos as storefront_dtos, handlers as storefront_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Brands (public)
        brands_handlers::list_brands,
        brands_handlers::get_brand,
        // Categories (public)
        categories_handlers::list_categories,
        categories_handlers::get_category,
        // Storefront (public)
        storefront_handlers::render_page,
        // Admin
        categories_handlers::update_brand_visibility,
        overrides_handlers::list_overrides,
        overrides_handlers::get_override,
        overrides_handlers::create_override,
        overrides_handlers::update_override,
        overrides_handlers::delete_override,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Brands
            brands_dtos::BrandResponseDto,
            ApiResponse<Vec<brands_dtos::BrandResponseDto>>,
            ApiResponse<brands_dtos::BrandResponseDto>,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategoryTreeDto,
            categories_dtos::UpdateBrandVisibilityDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            // Storefront
            Crumb,
            storefront_dtos::ProductSummaryDto,
            storefront_dtos::SeoMetadataDto,
            storefront_dtos::StorefrontPageDto,
            // Overrides
            overrides_dtos::OverrideFieldsDto,
            overrides_dtos::OverrideListItemDto,
            overrides_dtos::OverrideListDto,
            overrides_dtos::OverrideDetailDto,
            overrides_dtos::CreateOverrideDto,
            overrides_dtos::UpdateOverrideDto,
            ApiResponse<overrides_dtos::OverrideListDto>,
            ApiResponse<overrides_dtos::OverrideDetailDto>,
        )
    ),
    tags(
        (name = "brands", description = "Product brands (public)"),
        (name = "categories", description = "Product categories (public)"),
        (name = "storefront", description = "Virtual brand-category pages (public)"),
        (name = "brand-contents", description = "Per (brand, category) content overrides (admin only)"),
        (name = "admin", description = "Catalog administration (admin only)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Brandcat API",
        version = "0.1.0",
        description = "API documentation for Brandcat",
    )
)]
pub struct ApiDoc;

/// Adds HTTP Basic security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
