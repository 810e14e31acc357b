use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::categories::dtos::{CategoryResponseDto, UpdateBrandVisibilityDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::ApiResponse;

/// Query params for listing categories
#[derive(Debug, Deserialize)]
pub struct ListCategoriesQuery {
    /// If true, return tree structure. Default: false (flat list)
    #[serde(default)]
    pub tree: bool,
}

/// List all categories
///
/// Returns categories as flat list or tree structure based on `tree` query param.
#[utoipa::path(
    get,
    path = "/api/categories",
    params(
        ("tree" = Option<bool>, Query, description = "Return tree structure if true")
    ),
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
    Query(query): Query<ListCategoriesQuery>,
) -> Result<Json<ApiResponse<serde_json::Value>>> {
    let value = if query.tree {
        serde_json::to_value(service.list_tree().await?)
    } else {
        serde_json::to_value(service.list().await?)
    }
    .map_err(|e| AppError::Internal(format!("Failed to serialize categories: {}", e)))?;

    Ok(Json(ApiResponse::success(Some(value), None, None)))
}

/// Get category by slug
#[utoipa::path(
    get,
    path = "/api/categories/{slug}",
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.get_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Toggle a category's visibility in brand views
///
/// Hidden categories keep their virtual brand pages but the product
/// listing is not narrowed to the brand.
#[utoipa::path(
    put,
    path = "/api/admin/categories/{id}/brand-visibility",
    params(
        ("id" = i64, Path, description = "Category id")
    ),
    request_body = UpdateBrandVisibilityDto,
    responses(
        (status = 200, description = "Updated category", body = ApiResponse<CategoryResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    ),
    tag = "admin",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn update_brand_visibility(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateBrandVisibilityDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service
        .set_brand_visibility(id, dto.hidden_in_brand_view)
        .await?;

    tracing::info!(
        "Category {} brand visibility set to hidden={}",
        id,
        dto.hidden_in_brand_view
    );

    Ok(Json(ApiResponse::success(Some(category), None, None)))
}
