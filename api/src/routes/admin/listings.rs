use actix_web::{web, HttpResponse};
use sr_core::domain::value_objects::{RatingSortField, StoreSortField, UserSortField};
use sr_shared::types::{ApiResponse, SortOrder};

use crate::app::{AppState, Repositories};
use crate::dto::ListQuery;
use crate::handlers::ApiResult;

const DEFAULT_LIMIT: u32 = 20;

/// Handler for GET /api/admin/users
///
/// Each user comes with their owned stores and those stores' statistics.
pub async fn users<B: Repositories>(
    state: web::Data<AppState<B>>,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    let page = state
        .user_service
        .list_admin(
            query.user_filter()?,
            query.sort(UserSortField::CreatedAt, SortOrder::Desc),
            query.pagination(DEFAULT_LIMIT),
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Users retrieved successfully", page)))
}

/// Handler for GET /api/admin/stores
///
/// Filters: `name`, `address`, `ownerName`.
pub async fn stores<B: Repositories>(
    state: web::Data<AppState<B>>,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    let page = state
        .store_service
        .list_admin(
            query.admin_store_search(),
            query.sort(StoreSortField::CreatedAt, SortOrder::Desc),
            query.pagination(DEFAULT_LIMIT),
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Stores retrieved successfully", page)))
}

/// Handler for GET /api/admin/ratings
///
/// Filters: `rating`, `userName`, `storeName`.
pub async fn ratings<B: Repositories>(
    state: web::Data<AppState<B>>,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    let page = state
        .rating_service
        .list_all(
            query.rating_search()?,
            query.sort(RatingSortField::CreatedAt, SortOrder::Desc),
            query.pagination(DEFAULT_LIMIT),
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Ratings retrieved successfully", page)))
}
