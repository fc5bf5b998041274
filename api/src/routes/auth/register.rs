use actix_web::{web, HttpResponse};
use sr_shared::types::ApiResponse;

use crate::app::{AppState, Repositories};
use crate::dto::RegisterRequest;
use crate::handlers::{validate_request, ApiResult};

/// Handler for POST /api/auth/register
///
/// Creates a `normal_user` account and signs it in.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Alexandra Catherine Smith",
///     "email": "alex@example.com",
///     "password": "Secret#123",
///     "address": "1 Main Street"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "success": true,
///     "message": "User registered successfully",
///     "data": { "user": { "id": "...", "role": "normal_user" }, "token": "..." }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: A field breaks its validation rule
/// - 409 Conflict: The email is already registered
pub async fn register<B: Repositories>(
    state: web::Data<AppState<B>>,
    request: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let request = request.into_inner();
    validate_request(&request)?;

    let session = state.auth_service.register(request.into()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success("User registered successfully", session)))
}
