use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainResult;

/// Resolves a bearer token to the user it was issued for.
///
/// The HTTP middleware depends on this trait only, so it stays independent of
/// the repository types behind the concrete service.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, token: &str) -> DomainResult<User>;
}
