use actix_web::{web, HttpResponse};
use serde_json::json;
use sr_shared::types::ApiResponse;

use crate::app::{AppState, Repositories};
use crate::dto::ChangePasswordRequest;
use crate::handlers::{validate_request, ApiResult};
use crate::middleware::AuthContext;

/// Handler for GET /api/users/profile
///
/// The caller's account together with the stores they own.
pub async fn get_profile<B: Repositories>(
    state: web::Data<AppState<B>>,
    auth: AuthContext,
) -> ApiResult<HttpResponse> {
    let profile = state.user_service.get_by_id(auth.user_id()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "User profile retrieved successfully",
        json!({ "user": profile }),
    )))
}

/// Handler for PUT /api/users/password
///
/// # Request Body
///
/// ```json
/// { "currentPassword": "Old#Pass1", "newPassword": "New#Pass1" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Weak new password, wrong current password, or no change
pub async fn change_password<B: Repositories>(
    state: web::Data<AppState<B>>,
    auth: AuthContext,
    request: web::Json<ChangePasswordRequest>,
) -> ApiResult<HttpResponse> {
    validate_request(&request.0)?;

    state
        .auth_service
        .change_password(auth.user_id(), &request.current_password, &request.new_password)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("Password updated successfully")))
}

/// Handler for GET /api/users/stats
pub async fn get_stats<B: Repositories>(
    state: web::Data<AppState<B>>,
    auth: AuthContext,
) -> ApiResult<HttpResponse> {
    let stats = state.user_service.user_stats(auth.user_id()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "User stats retrieved successfully",
        stats,
    )))
}
