//! Product listing query with WP-style taxonomy clauses. The brand
//! filter mutates the query in place and re-parses it; it never builds
//! a new query object.

use crate::features::brands::models::Brand;
use crate::features::categories::models::Category;
use crate::shared::constants::{PRODUCTS_PER_PAGE, TAXONOMY_BRAND, TAXONOMY_CATEGORY};

/// One taxonomy constraint of a listing query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxQueryClause {
    pub taxonomy: String,
    pub field: String,
    pub operator: String,
    pub terms: Vec<String>,
}

impl TaxQueryClause {
    pub fn brand_in(slug: &str) -> Self {
        Self {
            taxonomy: TAXONOMY_BRAND.to_string(),
            field: "slug".to_string(),
            operator: "IN".to_string(),
            terms: vec![slug.to_string()],
        }
    }
}

/// Mutable category-listing query. `tax_query` is the raw clause list;
/// `parse()` recomputes the normalized clause set the listing service
/// translates to SQL.
#[derive(Debug, Clone)]
pub struct ListingQuery {
    pub category_id: i64,
    /// 0 = unpaged first page
    pub page: u32,
    pub tax_query: Vec<TaxQueryClause>,
    resolved: Vec<TaxQueryClause>,
}

impl ListingQuery {
    pub fn new(category_id: i64, page: u32) -> Self {
        let mut query = Self {
            category_id,
            page,
            tax_query: vec![TaxQueryClause {
                taxonomy: TAXONOMY_CATEGORY.to_string(),
                field: "term_id".to_string(),
                operator: "IN".to_string(),
                terms: vec![category_id.to_string()],
            }],
            resolved: Vec::new(),
        };
        query.parse();

        query
    }

    /// Recompute the normalized clause set: clauses without terms are
    /// dropped and duplicate (taxonomy, terms) pairs keep the first
    /// occurrence.
    pub fn parse(&mut self) {
        let mut resolved: Vec<TaxQueryClause> = Vec::with_capacity(self.tax_query.len());
        for clause in &self.tax_query {
            if clause.terms.is_empty() {
                continue;
            }
            let duplicate = resolved
                .iter()
                .any(|c| c.taxonomy == clause.taxonomy && c.terms == clause.terms);
            if !duplicate {
                resolved.push(clause.clone());
            }
        }
        self.resolved = resolved;
    }

    pub fn resolved(&self) -> &[TaxQueryClause] {
        &self.resolved
    }

    /// Brand slugs of the first normalized brand IN clause, if any
    pub fn brand_terms(&self) -> Option<&[String]> {
        self.resolved
            .iter()
            .find(|c| c.taxonomy == TAXONOMY_BRAND && c.operator == "IN")
            .map(|c| c.terms.as_slice())
    }

    pub fn limit(&self) -> i64 {
        PRODUCTS_PER_PAGE
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page.max(1) - 1) * PRODUCTS_PER_PAGE
    }
}

/// Narrow the listing to a brand. No-op when the brand is unresolved
/// or the category is flagged hidden-in-brand-view; otherwise appends
/// a brand IN clause and re-parses the query in place.
pub fn apply_brand_filter<'a>(
    query: &'a mut ListingQuery,
    category: &Category,
    brand: Option<&Brand>,
) -> &'a mut ListingQuery {
    if category.hidden_in_brand_view {
        return query;
    }
    let Some(brand) = brand else {
        return query;
    };

    query.tax_query.push(TaxQueryClause::brand_in(&brand.slug));
    query.parse();

    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{test_brand, test_category, test_hidden_category};

    #[test]
    fn test_new_query_has_category_clause() {
        let query = ListingQuery::new(5, 0);
        assert_eq!(query.resolved().len(), 1);
        assert_eq!(query.resolved()[0].taxonomy, TAXONOMY_CATEGORY);
        assert_eq!(query.brand_terms(), None);
    }

    #[test]
    fn test_apply_brand_filter_appends_clause() {
        let category = test_category(5, None, "Shoes", "shoes");
        let brand = test_brand("nike", "Nike");
        let mut query = ListingQuery::new(5, 0);

        apply_brand_filter(&mut query, &category, Some(&brand));

        assert_eq!(query.brand_terms(), Some(&["nike".to_string()][..]));
        assert_eq!(query.resolved().len(), 2);
    }

    #[test]
    fn test_apply_brand_filter_noop_without_brand() {
        let category = test_category(5, None, "Shoes", "shoes");
        let mut query = ListingQuery::new(5, 0);

        apply_brand_filter(&mut query, &category, None);

        assert_eq!(query.brand_terms(), None);
    }

    #[test]
    fn test_apply_brand_filter_noop_on_hidden_category() {
        // Hidden flag wins regardless of brand validity
        let category = test_hidden_category(5, None, "Shoes", "shoes");
        let brand = test_brand("nike", "Nike");
        let mut query = ListingQuery::new(5, 0);

        apply_brand_filter(&mut query, &category, Some(&brand));

        assert_eq!(query.brand_terms(), None);
        assert_eq!(query.resolved().len(), 1);
    }

    #[test]
    fn test_parse_drops_empty_and_duplicate_clauses() {
        let mut query = ListingQuery::new(5, 0);
        query.tax_query.push(TaxQueryClause {
            taxonomy: TAXONOMY_BRAND.to_string(),
            field: "slug".to_string(),
            operator: "IN".to_string(),
            terms: vec![],
        });
        query.tax_query.push(TaxQueryClause::brand_in("nike"));
        query.tax_query.push(TaxQueryClause::brand_in("nike"));
        query.parse();

        assert_eq!(query.resolved().len(), 2);
        assert_eq!(query.brand_terms(), Some(&["nike".to_string()][..]));
    }

    #[test]
    fn test_offset_pages() {
        assert_eq!(ListingQuery::new(5, 0).offset(), 0);
        assert_eq!(ListingQuery::new(5, 1).offset(), 0);
        assert_eq!(ListingQuery::new(5, 3).offset(), 2 * PRODUCTS_PER_PAGE);
    }
}
