use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::brands::handlers;
use crate::features::brands::services::BrandService;

/// Create routes for the brands feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<BrandService>) -> Router {
    Router::new()
        .route("/api/brands", get(handlers::list_brands))
        .route("/api/brands/{slug}", get(handlers::get_brand))
        .with_state(service)
}
