use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::brands::services::BrandService;
use crate::features::categories::services::CategoryService;
use crate::features::overrides::dtos::{
    CreateOverrideDto, OverrideDetailDto, OverrideListDto, OverrideListItemDto, UpdateOverrideDto,
};
use crate::features::overrides::models::OverrideKey;
use crate::features::overrides::services::OverrideService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// State for override admin handlers
#[derive(Clone)]
pub struct OverrideAdminState {
    pub overrides: Arc<OverrideService>,
    pub categories: Arc<CategoryService>,
    pub brands: Arc<BrandService>,
}

fn parse_key(key: &str) -> Result<OverrideKey> {
    OverrideKey::parse(key)
        .ok_or_else(|| AppError::BadRequest(format!("'{}' is not an override key", key)))
}

/// List all override records
///
/// Each entry carries the brand display name and the composed category
/// path so the list reads like the catalog, not like raw keys.
#[utoipa::path(
    get,
    path = "/api/admin/brand-contents",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of override records", body = ApiResponse<OverrideListDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "brand-contents",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn list_overrides(
    State(state): State<OverrideAdminState>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<OverrideListDto>>> {
    let keys = state.overrides.list_keys().await?;
    let total = keys.len() as i64;

    let page: Vec<_> = keys
        .into_iter()
        .skip(pagination.offset() as usize)
        .take(pagination.limit() as usize)
        .collect();

    let mut items = Vec::with_capacity(page.len());
    for key in &page {
        let brand_name = state
            .brands
            .find_by_slug(&key.brand_slug)
            .await?
            .map(|b| b.name)
            .unwrap_or_else(|| key.brand_slug.clone());

        let category_path = match state.categories.find_by_id(key.category_id).await? {
            Some(category) => state.categories.display_path_for(&category).await?,
            None => key.category_id.to_string(),
        };

        items.push(OverrideListItemDto {
            key: key.storage_key(),
            brand_slug: key.brand_slug.clone(),
            brand_name,
            category_id: key.category_id,
            category_path,
        });
    }

    let list = OverrideListDto {
        items,
        last_modified: state.overrides.last_modified().await?,
    };

    Ok(Json(ApiResponse::success(
        Some(list),
        None,
        Some(Meta { total }),
    )))
}

/// Get one override record by its settings key
#[utoipa::path(
    get,
    path = "/api/admin/brand-contents/{key}",
    params(
        ("key" = String, Path, description = "Override settings key, e.g. _nt_man_nike_5")
    ),
    responses(
        (status = 200, description = "Override record", body = ApiResponse<OverrideDetailDto>),
        (status = 400, description = "Malformed key"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Override not found")
    ),
    tag = "brand-contents",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn get_override(
    State(state): State<OverrideAdminState>,
    Path(key): Path<String>,
) -> Result<Json<ApiResponse<OverrideDetailDto>>> {
    let key = parse_key(&key)?;
    let record = state
        .overrides
        .get(&key)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Override '{}' not found", key.storage_key())))?;

    Ok(Json(ApiResponse::success(
        Some(OverrideDetailDto::from_parts(&key, record)),
        None,
        None,
    )))
}

/// Create an override record for a (brand, category) pair
#[utoipa::path(
    post,
    path = "/api/admin/brand-contents",
    request_body = CreateOverrideDto,
    responses(
        (status = 200, description = "Created override record", body = ApiResponse<OverrideDetailDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Override already exists")
    ),
    tag = "brand-contents",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn create_override(
    State(state): State<OverrideAdminState>,
    AppJson(dto): AppJson<CreateOverrideDto>,
) -> Result<Json<ApiResponse<OverrideDetailDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(format!("Invalid request: {}", e)))?;

    if state.brands.find_by_slug(&dto.brand_slug).await?.is_none() {
        return Err(AppError::Validation(format!(
            "Brand '{}' does not exist",
            dto.brand_slug
        )));
    }
    if state.categories.find_by_id(dto.category_id).await?.is_none() {
        return Err(AppError::Validation(format!(
            "Category {} does not exist",
            dto.category_id
        )));
    }

    let key = OverrideKey::new(dto.brand_slug, dto.category_id);
    let record = dto.fields.into();
    state.overrides.create(&key, record).await?;

    // Read back through the store so the response reflects what was saved
    let saved = state.overrides.get(&key).await?.unwrap_or_default();

    Ok(Json(ApiResponse::success(
        Some(OverrideDetailDto::from_parts(&key, saved)),
        Some("Override created".to_string()),
        None,
    )))
}

/// Overwrite the fields of an existing override record
#[utoipa::path(
    put,
    path = "/api/admin/brand-contents/{key}",
    params(
        ("key" = String, Path, description = "Override settings key")
    ),
    request_body = UpdateOverrideDto,
    responses(
        (status = 200, description = "Updated override record", body = ApiResponse<OverrideDetailDto>),
        (status = 400, description = "Malformed key or validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Override not found")
    ),
    tag = "brand-contents",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn update_override(
    State(state): State<OverrideAdminState>,
    Path(key): Path<String>,
    AppJson(dto): AppJson<UpdateOverrideDto>,
) -> Result<Json<ApiResponse<OverrideDetailDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(format!("Invalid request: {}", e)))?;

    let key = parse_key(&key)?;
    state.overrides.update(&key, dto.fields.into()).await?;

    let saved = state.overrides.get(&key).await?.unwrap_or_default();

    Ok(Json(ApiResponse::success(
        Some(OverrideDetailDto::from_parts(&key, saved)),
        Some("Override updated".to_string()),
        None,
    )))
}

/// Delete an override record and drop it from the index
#[utoipa::path(
    delete,
    path = "/api/admin/brand-contents/{key}",
    params(
        ("key" = String, Path, description = "Override settings key")
    ),
    responses(
        (status = 200, description = "Override deleted", body = ApiResponse<serde_json::Value>),
        (status = 400, description = "Malformed key"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Override not found")
    ),
    tag = "brand-contents",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn delete_override(
    State(state): State<OverrideAdminState>,
    Path(key): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>> {
    let key = parse_key(&key)?;
    state.overrides.delete(&key).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some("Override deleted".to_string()),
        None,
    )))
}
