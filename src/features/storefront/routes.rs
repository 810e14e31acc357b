use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::storefront::handlers;
use crate::features::storefront::services::StorefrontService;

pub fn routes(service: Arc<StorefrontService>) -> Router {
    Router::new()
        .route("/shop/{*path}", get(handlers::render_page))
        .with_state(service)
}
