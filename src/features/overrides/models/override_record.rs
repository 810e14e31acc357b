use serde::{Deserialize, Serialize};

use crate::shared::constants::OVERRIDE_KEY_PREFIX;

/// Identity of an override record: one per (brand, category) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OverrideKey {
    pub brand_slug: String,
    pub category_id: i64,
}

impl OverrideKey {
    pub fn new(brand_slug: impl Into<String>, category_id: i64) -> Self {
        Self {
            brand_slug: brand_slug.into(),
            category_id,
        }
    }

    /// Deterministic settings-store key: `_nt_man_{brand}_{categoryId}`
    pub fn storage_key(&self) -> String {
        format!(
            "{}{}_{}",
            OVERRIDE_KEY_PREFIX, self.brand_slug, self.category_id
        )
    }

    /// Parse a settings-store key back into its parts.
    ///
    /// The category id is taken after the last underscore, so brand
    /// slugs containing underscores still round-trip.
    pub fn parse(key: &str) -> Option<Self> {
        let rest = key.strip_prefix(OVERRIDE_KEY_PREFIX)?;
        let (brand_slug, id) = rest.rsplit_once('_')?;
        if brand_slug.is_empty() {
            return None;
        }
        let category_id = id.parse::<i64>().ok()?;

        Some(Self::new(brand_slug, category_id))
    }
}

/// Content override for one (brand, category) pair. All fields are
/// optional; an absent record and a record with all fields empty are
/// treated the same by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub bottom_title: Option<String>,
    #[serde(default)]
    pub bottom_description: Option<String>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
}

/// Treat empty and whitespace-only strings as "no override"
pub fn non_empty(field: Option<&String>) -> Option<&str> {
    field.map(|s| s.as_str()).filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_format() {
        let key = OverrideKey::new("nike", 42);
        assert_eq!(key.storage_key(), "_nt_man_nike_42");
    }

    #[test]
    fn test_parse_roundtrip() {
        let key = OverrideKey::new("new-balance", 7);
        assert_eq!(OverrideKey::parse(&key.storage_key()), Some(key));
    }

    #[test]
    fn test_parse_brand_with_underscore() {
        let parsed = OverrideKey::parse("_nt_man_old_brand_12").unwrap();
        assert_eq!(parsed.brand_slug, "old_brand");
        assert_eq!(parsed.category_id, 12);
    }

    #[test]
    fn test_parse_rejects_foreign_keys() {
        assert_eq!(OverrideKey::parse("_nt_cat_man_contents"), None);
        assert_eq!(OverrideKey::parse("_nt_man_nike"), None);
        assert_eq!(OverrideKey::parse("_nt_man__12"), None);
        assert_eq!(OverrideKey::parse("_nt_man_nike_abc"), None);
    }

    #[test]
    fn test_non_empty_filters_blank_fields() {
        assert_eq!(non_empty(Some(&"x".to_string())), Some("x"));
        assert_eq!(non_empty(Some(&"".to_string())), None);
        assert_eq!(non_empty(Some(&"   ".to_string())), None);
        assert_eq!(non_empty(None), None);
    }
}
