//! Bearer token authentication middleware.
//!
//! The token is resolved to a user through the [`Authenticator`] registered
//! in app data. The user is reloaded on every request, so role changes and
//! deleted accounts take effect immediately.

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use sr_core::{
    domain::entities::User,
    errors::{AuthError, DomainError},
    services::{Authenticator, Caller},
};
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use crate::handlers::ApiError;

/// The authenticated user, injected into request extensions
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: User,
}

impl AuthContext {
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }

    pub fn caller(&self) -> Caller {
        Caller::from(&self.user)
    }
}

/// JWT authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth;

impl JwtAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let user = match authenticate(&req).await {
                Ok(user) => user,
                Err(error) => return Ok(req.error_response(error).map_into_right_body()),
            };

            tracing::debug!(user_id = %user.id, role = %user.role, "Request authenticated");
            req.extensions_mut().insert(AuthContext { user });

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Resolve the request's bearer token to a user
async fn authenticate(req: &ServiceRequest) -> Result<User, ApiError> {
    let token = extract_bearer_token(req)
        .ok_or_else(|| ApiError::from(DomainError::from(AuthError::MissingToken)))?;

    let authenticator = req
        .app_data::<web::Data<Arc<dyn Authenticator>>>()
        .cloned()
        .ok_or_else(|| ApiError::from(DomainError::internal("Authenticator is not configured")))?;

    Ok(authenticator.authenticate(&token).await?)
}

fn unauthorized(error: AuthError) -> Error {
    ApiError::from(DomainError::from(error)).into()
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}

/// Extractor for handlers behind [`JwtAuth`]
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| unauthorized(AuthError::MissingToken));

        ready(result)
    }
}
