/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Products shown per storefront listing page
pub const PRODUCTS_PER_PAGE: i64 = 24;

// =============================================================================
// TAXONOMY CONSTANTS
// =============================================================================

/// Taxonomy name used by brand filter clauses in listing queries
pub const TAXONOMY_BRAND: &str = "product_brand";

/// Taxonomy name of the product category tree
pub const TAXONOMY_CATEGORY: &str = "product_cat";

// =============================================================================
// SETTINGS KEYS
// =============================================================================

/// Prefix of per (brand, category) override records in the settings store
pub const OVERRIDE_KEY_PREFIX: &str = "_nt_man_";

/// Settings key of the ordered index of all override record keys
pub const OVERRIDE_INDEX_KEY: &str = "_nt_cat_man_contents";

/// Settings key of the last-modified timestamp stamped on create/edit
pub const OVERRIDE_MODIFIED_KEY: &str = "_nt_cat_man_modified";

/// Separator used when composing hierarchical category display names
pub const CATEGORY_PATH_SEPARATOR: &str = " > ";

/// Upper bound on category ancestor walks. The parent chain is assumed
/// acyclic but never enforced at write time, so reads carry a hard stop.
pub const MAX_CATEGORY_DEPTH: usize = 32;
