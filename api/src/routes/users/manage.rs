use actix_web::{web, HttpResponse};
use serde_json::json;
use sr_core::domain::value_objects::UserSortField;
use sr_shared::types::{ApiResponse, SortOrder};
use uuid::Uuid;

use crate::app::{AppState, Repositories};
use crate::dto::{CreateUserRequest, ListQuery, UpdateUserRequest};
use crate::handlers::{validate_request, ApiResult};
use crate::middleware::AuthContext;

const DEFAULT_LIMIT: u32 = 10;

/// Handler for GET /api/users
///
/// Filters: `name`, `email`, `address` (substring), `role` (exact).
/// Sort: name, email, address, role, created_at; default `name ASC`.
pub async fn list_users<B: Repositories>(
    state: web::Data<AppState<B>>,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    let page = state
        .user_service
        .get_all(
            query.user_filter()?,
            query.sort(UserSortField::Name, SortOrder::Asc),
            query.pagination(DEFAULT_LIMIT),
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Users retrieved successfully", page)))
}

/// Handler for POST /api/users
pub async fn create_user<B: Repositories>(
    state: web::Data<AppState<B>>,
    request: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let request = request.into_inner();
    validate_request(&request)?;

    let user = state.user_service.create(request.into_new_user()?).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        "User created successfully",
        json!({ "user": user }),
    )))
}

/// Handler for GET /api/users/{id}
pub async fn get_user<B: Repositories>(
    state: web::Data<AppState<B>>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let profile = state.user_service.get_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "User retrieved successfully",
        json!({ "user": profile }),
    )))
}

/// Handler for PUT /api/users/{id}
pub async fn update_user<B: Repositories>(
    state: web::Data<AppState<B>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateUserRequest>,
) -> ApiResult<HttpResponse> {
    let request = request.into_inner();
    validate_request(&request)?;

    let user = state
        .user_service
        .update(path.into_inner(), request.into_changes()?)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "User updated successfully",
        json!({ "user": user }),
    )))
}

/// Handler for DELETE /api/users/{id}
///
/// ## Errors
/// - 400 Bad Request: Own account, last administrator, or a user who still owns stores
/// - 404 Not Found: Unknown user
pub async fn delete_user<B: Repositories>(
    state: web::Data<AppState<B>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    state
        .user_service
        .delete(&auth.caller(), path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("User deleted successfully")))
}
