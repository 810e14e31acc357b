pub mod brands;
pub mod categories;
pub mod overrides;
pub mod storefront;
