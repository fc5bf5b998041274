//! Rating route handlers
//!
//! Normal users write and list their own ratings, any role may read a
//! store's ratings (owners only their own stores), administrators list all.

pub mod listing;
pub mod submit;

use actix_web::web;
use sr_core::services::AccessPolicy;

use crate::app::Repositories;
use crate::middleware::{JwtAuth, RequireRole};

pub fn configure<B: Repositories>(cfg: &mut web::ServiceConfig) {
    let rater = || RequireRole::new(AccessPolicy::NORMAL_USER);

    cfg.service(
        web::scope("/ratings")
            .wrap(JwtAuth::new())
            .service(
                web::resource("")
                    .route(web::post().to(submit::submit_rating::<B>).wrap(rater()))
                    .route(
                        web::get()
                            .to(listing::list_all_ratings::<B>)
                            .wrap(RequireRole::new(AccessPolicy::SYSTEM_ADMIN)),
                    ),
            )
            .route("/my", web::get().to(listing::my_ratings::<B>).wrap(rater()))
            .route("/store/{store_id}", web::get().to(listing::store_ratings::<B>))
            .service(
                web::resource("/{id}")
                    .wrap(rater())
                    .route(web::put().to(submit::update_rating::<B>))
                    .route(web::delete().to(submit::delete_rating::<B>)),
            ),
    );
}
