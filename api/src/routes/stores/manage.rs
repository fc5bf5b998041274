use actix_web::{web, HttpResponse};
use serde_json::json;
use sr_shared::types::ApiResponse;
use uuid::Uuid;

use crate::app::{AppState, Repositories};
use crate::dto::{CreateStoreRequest, UpdateStoreRequest};
use crate::handlers::{validate_request, ApiResult};

/// Handler for POST /api/stores
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Corner Bakery",
///     "email": "bakery@example.com",
///     "address": "1 Main Street",
///     "owner_id": "6c0b5a4e-..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid fields, unknown owner, owner without the
///   `store_owner` role, or a store email already in use
pub async fn create_store<B: Repositories>(
    state: web::Data<AppState<B>>,
    request: web::Json<CreateStoreRequest>,
) -> ApiResult<HttpResponse> {
    let request = request.into_inner();
    validate_request(&request)?;

    let store = state.store_service.create(request.into()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        "Store created successfully",
        json!({ "store": store }),
    )))
}

/// Handler for PUT /api/stores/{id}
pub async fn update_store<B: Repositories>(
    state: web::Data<AppState<B>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateStoreRequest>,
) -> ApiResult<HttpResponse> {
    let request = request.into_inner();
    validate_request(&request)?;

    let store = state
        .store_service
        .update(path.into_inner(), request.into())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Store updated successfully",
        json!({ "store": store }),
    )))
}

/// Handler for DELETE /api/stores/{id}
///
/// Ratings of the store are removed with it.
pub async fn delete_store<B: Repositories>(
    state: web::Data<AppState<B>>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    state.store_service.delete(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("Store deleted successfully")))
}
