//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App,
};
use tracing_actix_web::TracingLogger;

use sr_core::repositories::{RatingRepository, StoreRepository, UserRepository};
use sr_core::services::{
    AdminService, AuthService, Authenticator, PasswordHasher, RatingService, StoreService,
    TokenService, TokenServiceConfig, UserService,
};
use sr_shared::config::AppConfig;

use crate::handlers::error::{json_error_handler, not_found, path_error_handler, query_error_handler};
use crate::middleware::create_cors;
use crate::routes;

/// The storage backend the services run on
pub trait Repositories: 'static {
    type Users: UserRepository + 'static;
    type Stores: StoreRepository + 'static;
    type Ratings: RatingRepository + 'static;
}

/// Application state that holds shared services
pub struct AppState<B: Repositories> {
    pub auth_service: Arc<AuthService<B::Users>>,
    pub user_service: Arc<UserService<B::Users, B::Stores, B::Ratings>>,
    pub store_service: Arc<StoreService<B::Stores, B::Users, B::Ratings>>,
    pub rating_service: Arc<RatingService<B::Ratings, B::Stores, B::Users>>,
    pub admin_service: Arc<AdminService<B::Users, B::Stores, B::Ratings>>,
}

impl<B: Repositories> AppState<B> {
    /// Wire every service over the given repositories
    pub fn new(
        users: Arc<B::Users>,
        stores: Arc<B::Stores>,
        ratings: Arc<B::Ratings>,
        config: &AppConfig,
    ) -> Self {
        let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));
        let password_hasher = PasswordHasher::from(&config.auth.password);

        Self {
            auth_service: Arc::new(AuthService::new(
                Arc::clone(&users),
                token_service,
                password_hasher,
            )),
            user_service: Arc::new(UserService::new(
                Arc::clone(&users),
                Arc::clone(&stores),
                Arc::clone(&ratings),
                password_hasher,
                config.reporting.clone(),
            )),
            store_service: Arc::new(StoreService::new(
                Arc::clone(&stores),
                Arc::clone(&users),
                Arc::clone(&ratings),
            )),
            rating_service: Arc::new(RatingService::new(
                Arc::clone(&ratings),
                Arc::clone(&stores),
                Arc::clone(&users),
            )),
            admin_service: Arc::new(AdminService::new(
                users,
                stores,
                ratings,
                config.reporting.clone(),
            )),
        }
    }

    /// Token resolver used by the authentication middleware
    pub fn authenticator(&self) -> Arc<dyn Authenticator> {
        self.auth_service.clone()
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<B: Repositories>(
    app_state: web::Data<AppState<B>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let authenticator = web::Data::new(app_state.authenticator());

    App::new()
        .app_data(app_state)
        .app_data(authenticator)
        .app_data(
            web::JsonConfig::default()
                .limit(config.server.max_payload_size)
                .error_handler(json_error_handler),
        )
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        // Add middleware (CORS runs first, then request tracing)
        .wrap(TracingLogger::default())
        .wrap(create_cors(&config.cors))
        .configure(routes::health::configure)
        .service(web::scope("/api").configure(routes::configure::<B>))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}
