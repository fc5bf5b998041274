//! Administrator views: dashboard statistics and enriched listings.
//!
//! Listings default to 20 per page, newest first.

pub mod dashboard;
pub mod listings;

use actix_web::web;
use sr_core::services::AccessPolicy;

use crate::app::Repositories;
use crate::middleware::{JwtAuth, RequireRole};

pub fn configure<B: Repositories>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(RequireRole::new(AccessPolicy::SYSTEM_ADMIN))
            .wrap(JwtAuth::new())
            .route("/dashboard", web::get().to(dashboard::dashboard::<B>))
            .route("/users", web::get().to(listings::users::<B>))
            .route("/stores", web::get().to(listings::stores::<B>))
            .route("/ratings", web::get().to(listings::ratings::<B>)),
    );
}
