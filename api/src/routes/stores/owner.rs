use actix_web::{web, HttpResponse};
use serde_json::json;
use sr_core::errors::DomainError;
use sr_shared::types::ApiResponse;

use crate::app::{AppState, Repositories};
use crate::handlers::ApiResult;
use crate::middleware::AuthContext;

/// Handler for GET /api/stores/my/store
///
/// The caller's first store with its ratings and statistics.
pub async fn my_store<B: Repositories>(
    state: web::Data<AppState<B>>,
    auth: AuthContext,
) -> ApiResult<HttpResponse> {
    let store = state
        .store_service
        .get_by_owner(auth.user_id())
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| DomainError::not_found_message("No store found for this owner"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Your store retrieved successfully",
        json!({ "store": store }),
    )))
}

/// Handler for GET /api/stores/mystores
pub async fn my_stores<B: Repositories>(
    state: web::Data<AppState<B>>,
    auth: AuthContext,
) -> ApiResult<HttpResponse> {
    let stores = state.store_service.get_by_owner(auth.user_id()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Owner stores retrieved successfully",
        json!({ "stores": stores }),
    )))
}
