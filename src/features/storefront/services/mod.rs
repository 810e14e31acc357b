mod listing_service;
mod storefront_service;

pub use listing_service::ListingService;
pub use storefront_service::StorefrontService;
