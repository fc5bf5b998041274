//! Rating listings. Sort allow-list: rating, created_at, updated_at;
//! default `created_at DESC`.

use actix_web::{web, HttpResponse};
use sr_core::domain::value_objects::RatingSortField;
use sr_shared::types::{ApiResponse, SortOrder};
use uuid::Uuid;

use crate::app::{AppState, Repositories};
use crate::dto::ListQuery;
use crate::handlers::ApiResult;
use crate::middleware::AuthContext;

const DEFAULT_LIMIT: u32 = 10;

/// Handler for GET /api/ratings/my
pub async fn my_ratings<B: Repositories>(
    state: web::Data<AppState<B>>,
    auth: AuthContext,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    let page = state
        .rating_service
        .list_mine(
            auth.user_id(),
            query.sort(RatingSortField::CreatedAt, SortOrder::Desc),
            query.pagination(DEFAULT_LIMIT),
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Your ratings retrieved successfully", page)))
}

/// Handler for GET /api/ratings/store/{store_id}
///
/// ## Errors
/// - 403 Forbidden: A store owner asking about someone else's store
/// - 404 Not Found: Unknown store
pub async fn store_ratings<B: Repositories>(
    state: web::Data<AppState<B>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    let report = state
        .rating_service
        .list_for_store(
            path.into_inner(),
            &auth.caller(),
            query.sort(RatingSortField::CreatedAt, SortOrder::Desc),
            query.pagination(DEFAULT_LIMIT),
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Store ratings retrieved successfully", report)))
}

/// Handler for GET /api/ratings
///
/// Filters: `rating` (1-5), `userName`, `storeName`.
pub async fn list_all_ratings<B: Repositories>(
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

    Ok(HttpResponse::Ok().json(ApiResponse::success("All ratings retrieved successfully", page)))
}
