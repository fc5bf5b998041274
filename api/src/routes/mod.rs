//! HTTP route handlers, one module per resource.
//!
//! Every handler answers with the `{success, message, data?}` envelope and
//! returns [`ApiResult`](crate::handlers::ApiResult) so failures go through
//! the shared error mapping.

pub mod admin;
pub mod auth;
pub mod health;
pub mod ratings;
pub mod stores;
pub mod users;

use actix_web::web;

use crate::app::Repositories;

/// Mount every resource under the caller's scope
pub fn configure<B: Repositories>(cfg: &mut web::ServiceConfig) {
    cfg.configure(auth::configure::<B>)
        .configure(users::configure::<B>)
        .configure(stores::configure::<B>)
        .configure(ratings::configure::<B>)
        .configure(admin::configure::<B>);
}
