use actix_web::{web, HttpResponse};
use serde_json::json;
use sr_shared::types::ApiResponse;

use crate::app::{AppState, Repositories};
use crate::handlers::ApiResult;
use crate::middleware::AuthContext;

/// Handler for GET /api/auth/me
pub async fn me<B: Repositories>(
    state: web::Data<AppState<B>>,
    auth: AuthContext,
) -> ApiResult<HttpResponse> {
    let user = state.auth_service.current_user(auth.user_id()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "User profile retrieved successfully",
        json!({ "user": user }),
    )))
}

/// Handler for POST /api/auth/logout
///
/// Tokens are stateless; the client discards its copy.
pub async fn logout(auth: AuthContext) -> HttpResponse {
    tracing::info!(user_id = %auth.user_id(), "User logged out");
    HttpResponse::Ok().json(ApiResponse::message("Logged out successfully"))
}
