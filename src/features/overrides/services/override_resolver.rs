//! Effective display/SEO metadata for a (brand, category) pair.
//!
//! All functions are pure reads over an optional override record; a
//! missing record behaves exactly like a record with all fields empty.

use crate::features::overrides::models::{non_empty, OverrideRecord};

/// Computed fallback title when no explicit override applies
fn fallback_title(category_name: &str, brand_name: &str) -> String {
    format!("{} {}", category_name, brand_name)
        .trim()
        .to_string()
}

/// SEO title precedence: seo_title -> title -> "{category} {brand}"
pub fn resolve_seo_title(
    record: Option<&OverrideRecord>,
    category_name: &str,
    brand_name: &str,
) -> String {
    if let Some(rec) = record {
        if let Some(seo_title) = non_empty(rec.seo_title.as_ref()) {
            return seo_title.to_string();
        }
        if let Some(title) = non_empty(rec.title.as_ref()) {
            return title.to_string();
        }
    }

    fallback_title(category_name, brand_name)
}

/// On-page title precedence: title -> "{category} {brand}".
///
/// The page heading never uses seo_title; that field is reserved for
/// the metadata head.
pub fn resolve_page_title(
    record: Option<&OverrideRecord>,
    category_name: &str,
    brand_name: &str,
) -> String {
    if let Some(title) = record.and_then(|rec| non_empty(rec.title.as_ref())) {
        return title.to_string();
    }

    fallback_title(category_name, brand_name)
}

/// SEO meta description override; `None` leaves the caller's default
pub fn resolve_seo_description(record: Option<&OverrideRecord>) -> Option<String> {
    record
        .and_then(|rec| non_empty(rec.seo_description.as_ref()))
        .map(|s| s.to_string())
}

/// Archive body description override; `None` leaves the caller's default
pub fn resolve_archive_description(record: Option<&OverrideRecord>) -> Option<String> {
    record
        .and_then(|rec| non_empty(rec.description.as_ref()))
        .map(|s| s.to_string())
}

/// Title of the below-listing content block, if overridden
pub fn resolve_bottom_title(record: Option<&OverrideRecord>) -> Option<String> {
    record
        .and_then(|rec| non_empty(rec.bottom_title.as_ref()))
        .map(|s| s.to_string())
}

/// Body of the below-listing content block, if overridden
pub fn resolve_bottom_description(record: Option<&OverrideRecord>) -> Option<String> {
    record
        .and_then(|rec| non_empty(rec.bottom_description.as_ref()))
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> OverrideRecord {
        OverrideRecord {
            title: Some("Custom title".to_string()),
            description: Some("Custom description".to_string()),
            bottom_title: Some("Bottom".to_string()),
            bottom_description: Some("Bottom body".to_string()),
            seo_title: Some("SEO title".to_string()),
            seo_description: Some("SEO description".to_string()),
        }
    }

    #[test]
    fn test_seo_title_prefers_seo_title() {
        let rec = full_record();
        assert_eq!(resolve_seo_title(Some(&rec), "Shoes", "Nike"), "SEO title");
    }

    #[test]
    fn test_seo_title_falls_back_to_title() {
        let rec = OverrideRecord {
            seo_title: None,
            ..full_record()
        };
        assert_eq!(
            resolve_seo_title(Some(&rec), "Shoes", "Nike"),
            "Custom title"
        );
    }

    #[test]
    fn test_seo_title_computed_fallback() {
        assert_eq!(resolve_seo_title(None, "Shoes", "Nike"), "Shoes Nike");
    }

    #[test]
    fn test_empty_fields_behave_like_missing_record() {
        let rec = OverrideRecord {
            title: Some("".to_string()),
            seo_title: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_seo_title(Some(&rec), "Shoes", "Nike"), "Shoes Nike");
        assert_eq!(resolve_page_title(Some(&rec), "Shoes", "Nike"), "Shoes Nike");
        assert_eq!(resolve_seo_description(Some(&rec)), None);
    }

    #[test]
    fn test_fallback_trims_when_brand_name_empty() {
        assert_eq!(resolve_seo_title(None, "Shoes", ""), "Shoes");
    }

    #[test]
    fn test_page_title_ignores_seo_title() {
        let rec = OverrideRecord {
            title: None,
            ..full_record()
        };
        assert_eq!(resolve_page_title(Some(&rec), "Shoes", "Nike"), "Shoes Nike");
    }

    #[test]
    fn test_page_title_uses_plain_title() {
        let rec = full_record();
        assert_eq!(
            resolve_page_title(Some(&rec), "Shoes", "Nike"),
            "Custom title"
        );
    }

    #[test]
    fn test_descriptions_resolve_to_none_without_override() {
        assert_eq!(resolve_seo_description(None), None);
        assert_eq!(resolve_archive_description(None), None);
        assert_eq!(resolve_bottom_title(None), None);
        assert_eq!(resolve_bottom_description(None), None);
    }

    #[test]
    fn test_descriptions_resolve_overrides() {
        let rec = full_record();
        assert_eq!(
            resolve_seo_description(Some(&rec)),
            Some("SEO description".to_string())
        );
        assert_eq!(
            resolve_archive_description(Some(&rec)),
            Some("Custom description".to_string())
        );
        assert_eq!(resolve_bottom_title(Some(&rec)), Some("Bottom".to_string()));
        assert_eq!(
            resolve_bottom_description(Some(&rec)),
            Some("Bottom body".to_string())
        );
    }
}
