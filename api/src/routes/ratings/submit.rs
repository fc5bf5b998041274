use actix_web::{web, HttpResponse};
use serde_json::json;
use sr_shared::types::ApiResponse;
use uuid::Uuid;

use crate::app::{AppState, Repositories};
use crate::dto::{SubmitRatingRequest, UpdateRatingRequest};
use crate::handlers::{validate_request, ApiResult};
use crate::middleware::AuthContext;

/// Handler for POST /api/ratings
///
/// # Request Body
///
/// ```json
/// { "store_id": "6c0b5a4e-...", "rating": 5 }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Rating outside 1-5 or fractional, or the store was already rated
/// - 404 Not Found: Unknown store
pub async fn submit_rating<B: Repositories>(
    state: web::Data<AppState<B>>,
    auth: AuthContext,
    request: web::Json<SubmitRatingRequest>,
) -> ApiResult<HttpResponse> {
    validate_request(&request.0)?;

    let rating = state
        .rating_service
        .submit(auth.user_id(), request.store_id, request.value()?)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        "Rating submitted successfully",
        json!({ "rating": rating }),
    )))
}

/// Handler for PUT /api/ratings/{id}
///
/// Only the author may change a rating.
pub async fn update_rating<B: Repositories>(
    state: web::Data<AppState<B>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<UpdateRatingRequest>,
) -> ApiResult<HttpResponse> {
    validate_request(&request.0)?;

    let rating = state
        .rating_service
        .update(auth.user_id(), path.into_inner(), request.value()?)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Rating updated successfully",
        json!({ "rating": rating }),
    )))
}

/// Handler for DELETE /api/ratings/{id}
pub async fn delete_rating<B: Repositories>(
    state: web::Data<AppState<B>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    state
        .rating_service
        .delete(auth.user_id(), path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("Rating deleted successfully")))
}
