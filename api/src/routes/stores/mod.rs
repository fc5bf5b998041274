//! Store route handlers
//!
//! Browsing is open to every authenticated role, the owner views to store
//! owners, and writes to system administrators.

pub mod browse;
pub mod manage;
pub mod owner;

use actix_web::web;
use sr_core::services::AccessPolicy;

use crate::app::Repositories;
use crate::middleware::{JwtAuth, RequireRole};

pub fn configure<B: Repositories>(cfg: &mut web::ServiceConfig) {
    let admin = || RequireRole::new(AccessPolicy::SYSTEM_ADMIN);
    let store_owner = || RequireRole::new(AccessPolicy::STORE_OWNER);

    cfg.service(
        web::scope("/stores")
            .wrap(JwtAuth::new())
            .service(
                web::resource("")
                    .route(web::get().to(browse::list_stores::<B>))
                    .route(web::post().to(manage::create_store::<B>).wrap(admin())),
            )
            .route("/search", web::get().to(browse::search_stores::<B>))
            .route(
                "/my/store",
                web::get().to(owner::my_store::<B>).wrap(store_owner()),
            )
            .route(
                "/mystores",
                web::get().to(owner::my_stores::<B>).wrap(store_owner()),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(browse::get_store::<B>))
                    .route(web::put().to(manage::update_store::<B>).wrap(admin()))
                    .route(web::delete().to(manage::delete_store::<B>).wrap(admin())),
            ),
    );
}
