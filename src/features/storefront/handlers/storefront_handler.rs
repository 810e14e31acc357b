use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::storefront::dtos::StorefrontPageDto;
use crate::features::storefront::services::StorefrontService;

/// Render a storefront page
///
/// The wildcard path is matched against the virtual category route
/// `[{brand}/]{category_base}/{category-path}[/page/{n}]`. Unmatched
/// paths are 404; an unknown brand segment renders the page without
/// brand filtering.
#[utoipa::path(
    get,
    path = "/shop/{path}",
    params(
        ("path" = String, Path, description = "Shop path, e.g. `nike/category/shoes/` or `category/shoes/page/2/`")
    ),
    responses(
        (status = 200, description = "Rendered page", body = StorefrontPageDto),
        (status = 404, description = "Path does not match the category route")
    ),
    tag = "storefront"
)]
pub async fn render_page(
    State(service): State<Arc<StorefrontService>>,
    Path(path): Path<String>,
) -> Result<Json<StorefrontPageDto>> {
    let page = service.render_page(&path).await?;

    Ok(Json(page))
}
