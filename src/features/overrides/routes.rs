use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::brands::services::BrandService;
use crate::features::categories::services::CategoryService;
use crate::features::overrides::handlers::{self, OverrideAdminState};
use crate::features::overrides::services::OverrideService;

/// Admin routes for override records (caller applies the admin auth
/// middleware)
pub fn admin_routes(
    overrides: Arc<OverrideService>,
    categories: Arc<CategoryService>,
    brands: Arc<BrandService>,
) -> Router {
    let state = OverrideAdminState {
        overrides,
        categories,
        brands,
    };

    Router::new()
        .route(
            "/api/admin/brand-contents",
            get(handlers::list_overrides).post(handlers::create_override),
        )
        .route(
            "/api/admin/brand-contents/{key}",
            get(handlers::get_override)
                .put(handlers::update_override)
                .delete(handlers::delete_override),
        )
        .with_state(state)
}
