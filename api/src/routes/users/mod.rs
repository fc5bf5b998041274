//! User route handlers
//!
//! Profile routes are open to every authenticated role; the rest of the
//! resource is for system administrators.

pub mod manage;
pub mod profile;

use actix_web::web;
use sr_core::services::AccessPolicy;

use crate::app::Repositories;
use crate::middleware::{JwtAuth, RequireRole};

pub fn configure<B: Repositories>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .wrap(JwtAuth::new())
            .route("/profile", web::get().to(profile::get_profile::<B>))
            .route("/password", web::put().to(profile::change_password::<B>))
            .route("/stats", web::get().to(profile::get_stats::<B>))
            .service(
                web::resource("")
                    .wrap(RequireRole::new(AccessPolicy::SYSTEM_ADMIN))
                    .route(web::get().to(manage::list_users::<B>))
                    .route(web::post().to(manage::create_user::<B>)),
            )
            .service(
                web::resource("/{id}")
                    .wrap(RequireRole::new(AccessPolicy::SYSTEM_ADMIN))
                    .route(web::get().to(manage::get_user::<B>))
                    .route(web::put().to(manage::update_user::<B>))
                    .route(web::delete().to(manage::delete_user::<B>)),
            ),
    );
}
