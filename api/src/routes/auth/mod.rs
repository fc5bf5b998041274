//! Authentication route handlers
//!
//! - Registration and login (public)
//! - Current user and logout (bearer token required)

pub mod login;
pub mod register;
pub mod session;

use actix_web::web;

use crate::app::Repositories;
use crate::middleware::JwtAuth;

pub fn configure<B: Repositories>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register::register::<B>))
            .route("/login", web::post().to(login::login::<B>))
            .route("/me", web::get().to(session::me::<B>).wrap(JwtAuth::new()))
            .route("/logout", web::post().to(session::logout).wrap(JwtAuth::new())),
    );
}
