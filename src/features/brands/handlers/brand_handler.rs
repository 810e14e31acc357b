use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::brands::dtos::BrandResponseDto;
use crate::features::brands::services::BrandService;
use crate::shared::types::ApiResponse;

/// List all brands
#[utoipa::path(
    get,
    path = "/api/brands",
    responses(
        (status = 200, description = "List of brands", body = ApiResponse<Vec<BrandResponseDto>>),
    ),
    tag = "brands"
)]
pub async fn list_brands(
    State(service): State<Arc<BrandService>>,
) -> Result<Json<ApiResponse<Vec<BrandResponseDto>>>> {
    let brands = service.list().await?;
    Ok(Json(ApiResponse::success(Some(brands), None, None)))
}

/// Get brand by slug
#[utoipa::path(
    get,
    path = "/api/brands/{slug}",
    params(
        ("slug" = String, Path, description = "Brand slug")
    ),
    responses(
        (status = 200, description = "Brand found", body = ApiResponse<BrandResponseDto>),
        (status = 404, description = "Brand not found")
    ),
    tag = "brands"
)]
pub async fn get_brand(
    State(service): State<Arc<BrandService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<BrandResponseDto>>> {
    let brand = service.get_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(Some(brand), None, None)))
}
