//! Fixed-order rendering pipeline for virtual brand-category pages.
//!
//! Each stage is a pure function over [`PageContext`]; the service
//! builds the context from storage, runs the stages, then executes the
//! resulting listing query. Stage order matters: the query must be
//! final before metadata refers to it, and breadcrumbs render last.

use crate::features::brands::models::Brand;
use crate::features::categories::models::Category;
use crate::features::overrides::models::OverrideRecord;
use crate::features::overrides::services::override_resolver;
use crate::features::storefront::breadcrumbs::{self, Crumb};
use crate::features::storefront::query::{apply_brand_filter, ListingQuery};
use crate::features::storefront::url;

/// Outward-facing SEO metadata of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoMetadata {
    pub title: String,
    pub description: Option<String>,
    pub canonical: Option<String>,
    /// `None` = no previous page
    pub prev_url: Option<String>,
    /// `None` = no next page
    pub next_url: Option<String>,
}

/// Everything one storefront request needs, resolved up front
#[derive(Debug, Clone)]
pub struct PageContext {
    pub site_base: String,
    pub category: Category,
    /// Raw brand segment from the URL; present even when it does not
    /// resolve to a known brand
    pub brand_slug: Option<String>,
    /// Resolved brand record, when the slug is known
    pub brand: Option<Brand>,
    /// 0 = unpaged first page
    pub page: u32,
    pub overrides: Option<OverrideRecord>,
    pub query: ListingQuery,
    pub page_title: String,
    pub archive_description: Option<String>,
    pub bottom_title: Option<String>,
    pub bottom_description: Option<String>,
    pub seo: SeoMetadata,
    pub breadcrumbs: Vec<Crumb>,
}

pub type Stage = fn(PageContext) -> PageContext;

/// The named stages, in invocation order
pub const STAGES: &[(&str, Stage)] = &[
    ("resolve-query", resolve_query),
    ("resolve-metadata", resolve_metadata),
    ("render-breadcrumbs", render_breadcrumbs),
];

pub fn run(ctx: PageContext) -> PageContext {
    STAGES.iter().fold(ctx, |ctx, (name, stage)| {
        tracing::debug!("Pipeline stage: {}", name);
        stage(ctx)
    })
}

/// Narrow the product listing to the selected brand
fn resolve_query(mut ctx: PageContext) -> PageContext {
    apply_brand_filter(&mut ctx.query, &ctx.category, ctx.brand.as_ref());

    ctx
}

/// Apply override precedence to titles and descriptions and route the
/// outward URLs through the brand-segment rewrite
fn resolve_metadata(mut ctx: PageContext) -> PageContext {
    if let Some(brand) = &ctx.brand {
        ctx.page_title = override_resolver::resolve_page_title(
            ctx.overrides.as_ref(),
            &ctx.category.name,
            &brand.name,
        );
        ctx.seo.title = override_resolver::resolve_seo_title(
            ctx.overrides.as_ref(),
            &ctx.category.name,
            &brand.name,
        );
    }

    if let Some(brand_slug) = ctx.brand_slug.clone() {
        // The platform's own category description never shows on brand
        // pages; the override description shows on the first page only.
        ctx.archive_description = if ctx.page == 0 {
            override_resolver::resolve_archive_description(ctx.overrides.as_ref())
        } else {
            None
        };
        ctx.bottom_title = override_resolver::resolve_bottom_title(ctx.overrides.as_ref());
        ctx.bottom_description =
            override_resolver::resolve_bottom_description(ctx.overrides.as_ref());

        if let Some(seo_description) =
            override_resolver::resolve_seo_description(ctx.overrides.as_ref())
        {
            ctx.seo.description = Some(seo_description);
        }

        ctx.seo.canonical =
            url::rewrite_optional_url(ctx.seo.canonical.take(), &ctx.site_base, &brand_slug);
        ctx.seo.prev_url =
            url::rewrite_optional_url(ctx.seo.prev_url.take(), &ctx.site_base, &brand_slug);
        ctx.seo.next_url =
            url::rewrite_optional_url(ctx.seo.next_url.take(), &ctx.site_base, &brand_slug);
    }

    ctx
}

/// Splice the brand crumb in before the current category crumb
fn render_breadcrumbs(mut ctx: PageContext) -> PageContext {
    if let Some(brand) = &ctx.brand {
        let crumb = Crumb::new(
            brand.name.clone(),
            url::brand_archive_url(&ctx.site_base, &brand.slug),
        );
        ctx.breadcrumbs = breadcrumbs::splice(std::mem::take(&mut ctx.breadcrumbs), crumb);
    }

    ctx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::overrides::models::OverrideRecord;
    use crate::shared::test_helpers::{test_brand, test_category, test_hidden_category};

    const BASE: &str = "https://shop.example.com";

    fn context(category: Category, brand_slug: Option<&str>, brand: Option<Brand>) -> PageContext {
        let query = ListingQuery::new(category.id, 0);
        let page_title = category.name.clone();
        let archive_description = category.description.clone();
        PageContext {
            site_base: BASE.to_string(),
            seo: SeoMetadata {
                title: page_title.clone(),
                description: None,
                canonical: Some(format!("{}/category/{}/", BASE, category.slug)),
                prev_url: None,
                next_url: Some(format!("{}/category/{}/page/2/", BASE, category.slug)),
            },
            breadcrumbs: vec![
                Crumb::new("Home", format!("{}/", BASE)),
                Crumb::new(category.name.clone(), format!("{}/category/{}/", BASE, category.slug)),
            ],
            category,
            brand_slug: brand_slug.map(|s| s.to_string()),
            brand,
            page: 0,
            overrides: None,
            query,
            page_title,
            archive_description,
            bottom_title: None,
            bottom_description: None,
        }
    }

    #[test]
    fn test_no_brand_is_a_full_noop() {
        let ctx = context(test_category(5, None, "Shoes", "shoes"), None, None);
        let before = ctx.clone();
        let after = run(ctx);

        assert_eq!(after.page_title, before.page_title);
        assert_eq!(after.seo, before.seo);
        assert_eq!(after.breadcrumbs, before.breadcrumbs);
        assert_eq!(after.query.brand_terms(), None);
    }

    #[test]
    fn test_resolved_brand_filters_titles_and_crumbs() {
        let ctx = context(
            test_category(5, None, "Shoes", "shoes"),
            Some("nike"),
            Some(test_brand("nike", "Nike")),
        );
        let after = run(ctx);

        assert_eq!(after.page_title, "Shoes Nike");
        assert_eq!(after.seo.title, "Shoes Nike");
        assert_eq!(after.query.brand_terms(), Some(&["nike".to_string()][..]));

        let labels: Vec<&str> = after.breadcrumbs.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Nike", "Shoes"]);
        assert_eq!(
            after.breadcrumbs[1].url,
            "https://shop.example.com/nike/"
        );
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut ctx = context(
            test_category(5, None, "Shoes", "shoes"),
            Some("nike"),
            Some(test_brand("nike", "Nike")),
        );
        ctx.overrides = Some(OverrideRecord {
            title: Some("Nike footwear".to_string()),
            description: Some("Custom intro".to_string()),
            seo_title: Some("Nike shoes online".to_string()),
            seo_description: Some("Buy Nike shoes".to_string()),
            bottom_title: Some("About Nike".to_string()),
            bottom_description: Some("Long form".to_string()),
        });
        let after = run(ctx);

        assert_eq!(after.page_title, "Nike footwear");
        assert_eq!(after.seo.title, "Nike shoes online");
        assert_eq!(after.seo.description.as_deref(), Some("Buy Nike shoes"));
        assert_eq!(after.archive_description.as_deref(), Some("Custom intro"));
        assert_eq!(after.bottom_title.as_deref(), Some("About Nike"));
    }

    #[test]
    fn test_archive_description_only_on_first_page() {
        let mut ctx = context(
            test_category(5, None, "Shoes", "shoes"),
            Some("nike"),
            Some(test_brand("nike", "Nike")),
        );
        ctx.page = 2;
        ctx.query.page = 2;
        ctx.overrides = Some(OverrideRecord {
            description: Some("Custom intro".to_string()),
            ..Default::default()
        });
        let after = run(ctx);

        assert_eq!(after.archive_description, None);
    }

    #[test]
    fn test_unknown_brand_slug_still_rewrites_urls() {
        // Brand segment present but not a known brand: listing and
        // titles stay untouched, the default description is hidden and
        // the outward URLs still carry the segment.
        let mut ctx = context(test_category(5, None, "Shoes", "shoes"), Some("ghost"), None);
        ctx.archive_description = Some("Default category text".to_string());
        let after = run(ctx);

        assert_eq!(after.page_title, "Shoes");
        assert_eq!(after.query.brand_terms(), None);
        assert_eq!(after.archive_description, None);
        assert_eq!(
            after.seo.canonical.as_deref(),
            Some("https://shop.example.com/ghost/category/shoes/")
        );
        let labels: Vec<&str> = after.breadcrumbs.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Shoes"]);
    }

    #[test]
    fn test_hidden_category_keeps_listing_unfiltered() {
        let ctx = context(
            test_hidden_category(5, None, "Shoes", "shoes"),
            Some("nike"),
            Some(test_brand("nike", "Nike")),
        );
        let after = run(ctx);

        // Metadata still reflects the brand, the listing does not
        assert_eq!(after.query.brand_terms(), None);
        assert_eq!(after.page_title, "Shoes Nike");
    }

    #[test]
    fn test_prev_sentinel_passes_through() {
        let ctx = context(
            test_category(5, None, "Shoes", "shoes"),
            Some("nike"),
            Some(test_brand("nike", "Nike")),
        );
        let after = run(ctx);

        assert_eq!(after.seo.prev_url, None);
        assert_eq!(
            after.seo.next_url.as_deref(),
            Some("https://shop.example.com/nike/category/shoes/page/2/")
        );
    }
}
