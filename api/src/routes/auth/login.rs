use actix_web::{web, HttpResponse};
use sr_shared::types::ApiResponse;

use crate::app::{AppState, Repositories};
use crate::dto::LoginRequest;
use crate::handlers::{validate_request, ApiResult};

/// Handler for POST /api/auth/login
///
/// Returns the user and a fresh token. Unknown emails and wrong passwords
/// both answer 401 "Invalid email or password".
pub async fn login<B: Repositories>(
    state: web::Data<AppState<B>>,
    request: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    validate_request(&request.0)?;

    let session = state
        .auth_service
        .login(request.email.trim(), &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Login successful", session)))
}
