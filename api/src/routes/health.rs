use actix_web::{web, HttpResponse};
use sr_shared::types::HealthResponse;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Handler for GET /health
///
/// Liveness only; it does not touch the database.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "store-rating-api",
        env!("CARGO_PKG_VERSION"),
    ))
}
