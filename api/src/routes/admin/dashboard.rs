use actix_web::{web, HttpResponse};
use sr_shared::types::ApiResponse;

use crate::app::{AppState, Repositories};
use crate::handlers::ApiResult;

/// Handler for GET /api/admin/dashboard
///
/// Totals, role distribution, recent activity, top rated stores and the
/// rating histogram.
pub async fn dashboard<B: Repositories>(state: web::Data<AppState<B>>) -> ApiResult<HttpResponse> {
    let stats = state.admin_service.dashboard().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Dashboard statistics retrieved successfully",
        stats,
    )))
}
