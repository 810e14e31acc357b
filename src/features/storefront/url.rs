//! Shop URL handling: inbound route parsing for virtual brand-category
//! pages and the outbound brand-segment rewrite applied to canonical
//! and pagination URLs.

/// Parsed shop route:
/// `[{brand}/]{category_base}/{category-path}[/page/{page}]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub brand_slug: Option<String>,
    /// Category path segments, most general first; never empty
    pub category_slugs: Vec<String>,
    /// 0 = unpaged first page
    pub page: u32,
}

/// Match a shop path against the virtual category route. `None` means
/// "not our route" and the caller falls through to a 404.
pub fn parse_shop_path(path: &str, category_base: &str) -> Option<RouteMatch> {
    let mut segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    // Trailing pagination: .../page/{n}
    let mut page = 0u32;
    if segments.len() >= 2 && segments[segments.len() - 2] == "page" {
        page = segments[segments.len() - 1].parse().ok()?;
        segments.truncate(segments.len() - 2);
    }

    let (brand_slug, category_slugs) = if segments.first() == Some(&category_base) {
        (None, &segments[1..])
    } else if segments.get(1) == Some(&category_base) {
        (Some(segments[0].to_string()), &segments[2..])
    } else {
        return None;
    };

    if category_slugs.is_empty() {
        return None;
    }

    Some(RouteMatch {
        brand_slug,
        category_slugs: category_slugs.iter().map(|s| s.to_string()).collect(),
        page,
    })
}

/// Rewrite `<base>/<path>` to `<base>/<brand>/<path>`.
///
/// Only URLs whose path begins with the site base are touched; external
/// and non-canonical URLs pass through unchanged, as do empty URLs and
/// empty brand slugs. Doubled separators introduced by the splice are
/// collapsed, except inside the scheme's `://`.
///
/// Applying this twice inserts the segment twice; the caller rewrites
/// each URL exactly once per request.
pub fn insert_brand_segment(url: &str, base_url: &str, brand_slug: &str) -> String {
    if url.is_empty() || brand_slug.is_empty() {
        return url.to_string();
    }

    let base = format!("{}/", base_url.trim_end_matches('/'));
    if !url.starts_with(&base) {
        return url.to_string();
    }

    let spliced = format!("{}{}/{}", base, brand_slug, &url[base.len()..]);

    collapse_double_slashes(&spliced)
}

/// Rewrite wrapper for optional URLs. `None` is the "no such link"
/// sentinel (e.g. no previous page) and passes through untouched.
pub fn rewrite_optional_url(
    url: Option<String>,
    base_url: &str,
    brand_slug: &str,
) -> Option<String> {
    url.map(|u| insert_brand_segment(&u, base_url, brand_slug))
}

/// Archive URL of a brand: `<base>/<brand>/`
pub fn brand_archive_url(base_url: &str, brand_slug: &str) -> String {
    format!("{}/{}/", base_url.trim_end_matches('/'), brand_slug)
}

fn collapse_double_slashes(url: &str) -> String {
    let (scheme, rest) = match url.split_once("://") {
        Some((scheme, rest)) => (Some(scheme), rest),
        None => (None, url),
    };

    let mut collapsed = rest.to_string();
    while collapsed.contains("//") {
        collapsed = collapsed.replace("//", "/");
    }

    match scheme {
        Some(scheme) => format!("{}://{}", scheme, collapsed),
        None => collapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://shop.example.com";

    #[test]
    fn test_parse_brand_category_path() {
        let m = parse_shop_path("nike/category/shoes/running", "category").unwrap();
        assert_eq!(m.brand_slug.as_deref(), Some("nike"));
        assert_eq!(m.category_slugs, vec!["shoes", "running"]);
        assert_eq!(m.page, 0);
    }

    #[test]
    fn test_parse_plain_category_path() {
        let m = parse_shop_path("category/shoes", "category").unwrap();
        assert_eq!(m.brand_slug, None);
        assert_eq!(m.category_slugs, vec!["shoes"]);
    }

    #[test]
    fn test_parse_paged_path() {
        let m = parse_shop_path("/nike/category/shoes/page/3/", "category").unwrap();
        assert_eq!(m.brand_slug.as_deref(), Some("nike"));
        assert_eq!(m.category_slugs, vec!["shoes"]);
        assert_eq!(m.page, 3);
    }

    #[test]
    fn test_parse_rejects_foreign_paths() {
        assert_eq!(parse_shop_path("cart", "category"), None);
        assert_eq!(parse_shop_path("category", "category"), None);
        assert_eq!(parse_shop_path("nike/category", "category"), None);
        assert_eq!(parse_shop_path("", "category"), None);
        assert_eq!(parse_shop_path("nike/category/shoes/page/x", "category"), None);
    }

    #[test]
    fn test_insert_brand_segment() {
        assert_eq!(
            insert_brand_segment(
                "https://shop.example.com/category/shoes/",
                BASE,
                "nike"
            ),
            "https://shop.example.com/nike/category/shoes/"
        );
    }

    #[test]
    fn test_insert_brand_segment_foreign_url_unchanged() {
        assert_eq!(
            insert_brand_segment("https://other.example.com/category/shoes/", BASE, "nike"),
            "https://other.example.com/category/shoes/"
        );
    }

    #[test]
    fn test_insert_brand_segment_empty_inputs_unchanged() {
        assert_eq!(insert_brand_segment("", BASE, "nike"), "");
        let url = "https://shop.example.com/category/shoes/";
        assert_eq!(insert_brand_segment(url, BASE, ""), url);
    }

    #[test]
    fn test_insert_brand_segment_collapses_doubled_slashes() {
        assert_eq!(
            insert_brand_segment(
                "https://shop.example.com//category//shoes/",
                BASE,
                "nike"
            ),
            "https://shop.example.com/nike/category/shoes/"
        );
    }

    #[test]
    fn test_insert_brand_segment_twice_doubles_the_segment() {
        // Documented actual behavior: the rewrite is not idempotent.
        let once = insert_brand_segment("https://shop.example.com/category/shoes/", BASE, "nike");
        let twice = insert_brand_segment(&once, BASE, "nike");
        assert_eq!(twice, "https://shop.example.com/nike/nike/category/shoes/");
    }

    #[test]
    fn test_rewrite_optional_url_passes_none_through() {
        assert_eq!(rewrite_optional_url(None, BASE, "nike"), None);
        assert_eq!(
            rewrite_optional_url(
                Some("https://shop.example.com/category/shoes/page/2/".to_string()),
                BASE,
                "nike"
            ),
            Some("https://shop.example.com/nike/category/shoes/page/2/".to_string())
        );
    }

    #[test]
    fn test_brand_archive_url() {
        assert_eq!(
            brand_archive_url(BASE, "nike"),
            "https://shop.example.com/nike/"
        );
    }
}
