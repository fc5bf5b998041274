//! Role gate applied after [`JwtAuth`](super::JwtAuth).

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use sr_core::services::AccessPolicy;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use super::auth::AuthContext;
use crate::handlers::ApiError;

/// Rejects callers whose role the policy does not allow.
///
/// Requests without an [`AuthContext`] fail with 401, callers with the
/// wrong role with 403.
#[derive(Debug, Clone, Copy)]
pub struct RequireRole {
    policy: AccessPolicy,
}

impl RequireRole {
    pub fn new(policy: AccessPolicy) -> Self {
        Self { policy }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            policy: self.policy,
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    policy: AccessPolicy,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
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
        let caller = req.extensions().get::<AuthContext>().map(AuthContext::caller);
        let verdict = self.policy.check(caller.as_ref());

        Box::pin(async move {
            if let Err(error) = verdict {
                return Ok(req.error_response(ApiError::from(error)).map_into_right_body());
            }
            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}
