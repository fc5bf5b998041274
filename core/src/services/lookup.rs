//! Batch loading of related records for read models.

use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::domain::entities::store::Store;
use crate::domain::entities::user::User;
use crate::errors::DomainResult;
use crate::repositories::{StoreRepository, UserRepository};

/// Distinct ids in first-seen order
pub(crate) fn unique_ids(ids: impl IntoIterator<Item = Uuid>) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

pub(crate) async fn users_by_id<U>(users: &U, ids: &[Uuid]) -> DomainResult<HashMap<Uuid, User>>
where
    U: UserRepository + ?Sized,
{
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let found = users.find_by_ids(ids).await?;
    Ok(found.into_iter().map(|user| (user.id, user)).collect())
}

pub(crate) async fn stores_by_id<S>(stores: &S, ids: &[Uuid]) -> DomainResult<HashMap<Uuid, Store>>
where
    S: StoreRepository + ?Sized,
{
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let found = stores.find_by_ids(ids).await?;
    Ok(found.into_iter().map(|store| (store.id, store)).collect())
}
