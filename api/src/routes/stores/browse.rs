use actix_web::{web, HttpResponse};
use serde_json::json;
use sr_core::domain::value_objects::StoreSortField;
use sr_shared::types::{ApiResponse, SortOrder};
use uuid::Uuid;

use crate::app::{AppState, Repositories};
use crate::dto::ListQuery;
use crate::handlers::ApiResult;
use crate::middleware::AuthContext;

/// Handler for GET /api/stores
///
/// Newest first, 12 per page by default. Each entry carries the store's
/// average rating and the caller's own rating, if any. Filter: `name`.
pub async fn list_stores<B: Repositories>(
    state: web::Data<AppState<B>>,
    auth: AuthContext,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    let page = state
        .store_service
        .get_all(Some(auth.user_id()), query.name.clone(), query.pagination(12))
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Stores retrieved successfully", page)))
}

/// Handler for GET /api/stores/search
///
/// Filters: `name`, `address`. Sort: name, address, created_at; default `name ASC`.
pub async fn search_stores<B: Repositories>(
    state: web::Data<AppState<B>>,
    auth: AuthContext,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    let page = state
        .store_service
        .search(
            Some(auth.user_id()),
            query.store_filter(),
            query.sort(StoreSortField::Name, SortOrder::Asc),
            query.pagination(10),
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Store search completed successfully",
        page,
    )))
}

/// Handler for GET /api/stores/{id}
pub async fn get_store<B: Repositories>(
    state: web::Data<AppState<B>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let store = state
        .store_service
        .get_by_id(path.into_inner(), Some(auth.user_id()))
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Store retrieved successfully",
        json!({ "store": store }),
    )))
}
