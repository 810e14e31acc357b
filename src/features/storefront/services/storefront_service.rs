use std::sync::Arc;

use crate::core::config::SiteConfig;
use crate::core::error::{AppError, Result};
use crate::features::brands::models::Brand;
use crate::features::brands::services::BrandService;
use crate::features::categories::models::Category;
use crate::features::categories::services::CategoryService;
use crate::features::overrides::models::{OverrideKey, OverrideRecord};
use crate::features::overrides::services::OverrideService;
use crate::features::storefront::breadcrumbs::Crumb;
use crate::features::storefront::dtos::StorefrontPageDto;
use crate::features::storefront::pipeline::{self, PageContext, SeoMetadata};
use crate::features::storefront::query::ListingQuery;
use crate::features::storefront::services::ListingService;
use crate::features::storefront::url;
use crate::shared::constants::PRODUCTS_PER_PAGE;

/// Renders virtual brand-category pages: parses the shop route, loads
/// the page's records, runs the pipeline stages and executes the
/// resulting listing query.
pub struct StorefrontService {
    site: SiteConfig,
    categories: Arc<CategoryService>,
    brands: Arc<BrandService>,
    overrides: Arc<OverrideService>,
    listing: ListingService,
}

impl StorefrontService {
    pub fn new(
        site: SiteConfig,
        categories: Arc<CategoryService>,
        brands: Arc<BrandService>,
        overrides: Arc<OverrideService>,
        listing: ListingService,
    ) -> Self {
        Self {
            site,
            categories,
            brands,
            overrides,
            listing,
        }
    }

    /// Render the page at a shop path. 404 when the path does not match
    /// the virtual category route or the category is unknown; an
    /// unknown brand segment is kept as a raw slug and the page renders
    /// without brand filtering.
    pub async fn render_page(&self, path: &str) -> Result<StorefrontPageDto> {
        let route = url::parse_shop_path(path, &self.site.category_base)
            .ok_or_else(|| AppError::NotFound(format!("No page at '{}'", path)))?;

        // parse_shop_path never returns an empty category path
        let leaf_slug = route
            .category_slugs
            .last()
            .ok_or_else(|| AppError::NotFound(format!("No page at '{}'", path)))?;
        let category = self
            .categories
            .find_by_slug(leaf_slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", leaf_slug)))?;

        let brand = match &route.brand_slug {
            Some(slug) => self.brands.find_by_slug(slug).await?,
            None => None,
        };

        let overrides = match (&route.brand_slug, &brand) {
            (Some(slug), Some(_)) => {
                self.overrides
                    .get(&OverrideKey::new(slug.clone(), category.id))
                    .await?
            }
            _ => None,
        };

        let ctx = self.build_context(&route, category, brand, overrides).await?;
        let ctx = pipeline::run(ctx);

        let products = self.listing.list(&ctx.query).await?;
        let total = self.listing.count(&ctx.query).await?;

        let mut page = StorefrontPageDto::from_context(ctx, products, total);
        page.seo.next_url = self.next_url(&route, total);

        Ok(page)
    }

    /// Assemble the pre-pipeline context: default titles, canonical and
    /// prev URL from the unscoped category route, breadcrumb trail from
    /// the ancestor chain.
    async fn build_context(
        &self,
        route: &url::RouteMatch,
        category: Category,
        brand: Option<Brand>,
        overrides: Option<OverrideRecord>,
    ) -> Result<PageContext> {
        let base = &self.site.base_url;
        let category_path = route.category_slugs.join("/");
        let unpaged = format!("{}/{}/{}/", base, self.site.category_base, category_path);

        let canonical = if route.page > 1 {
            format!("{}page/{}/", unpaged, route.page)
        } else {
            unpaged.clone()
        };
        let prev_url = match route.page {
            0 | 1 => None,
            2 => Some(unpaged.clone()),
            n => Some(format!("{}page/{}/", unpaged, n - 1)),
        };

        let mut breadcrumbs = vec![Crumb::new("Home", format!("{}/", base))];
        let mut trail_url = format!("{}/{}/", base, self.site.category_base);
        for ancestor in self.categories.ancestor_chain(&category).await? {
            trail_url = format!("{}{}/", trail_url, ancestor.slug);
            breadcrumbs.push(Crumb::new(ancestor.name.clone(), trail_url.clone()));
        }

        let query = ListingQuery::new(category.id, route.page);

        Ok(PageContext {
            site_base: base.clone(),
            seo: SeoMetadata {
                title: category.name.clone(),
                description: category.description.clone(),
                canonical: Some(canonical),
                prev_url,
                next_url: None,
            },
            page_title: category.name.clone(),
            archive_description: category.description.clone(),
            bottom_title: None,
            bottom_description: None,
            breadcrumbs,
            category,
            brand_slug: route.brand_slug.clone(),
            brand,
            page: route.page,
            overrides,
            query,
        })
    }

    /// Next-page URL, computed after the listing because it depends on
    /// the filtered total. Rewritten with the brand segment like the
    /// other outward URLs.
    fn next_url(&self, route: &url::RouteMatch, total: i64) -> Option<String> {
        let page = route.page.max(1);
        if i64::from(page) * PRODUCTS_PER_PAGE >= total {
            return None;
        }

        let category_path = route.category_slugs.join("/");
        let next = format!(
            "{}/{}/{}/page/{}/",
            self.site.base_url,
            self.site.category_base,
            category_path,
            page + 1
        );

        match &route.brand_slug {
            Some(slug) => url::rewrite_optional_url(Some(next), &self.site.base_url, slug),
            None => Some(next),
        }
    }
}
