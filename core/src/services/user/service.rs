//! User service implementation

use chrono::{Duration, Utc};
use sr_shared::config::ReportingConfig;
use sr_shared::types::{Pagination, PaginationMeta, Sort, SortOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::rating::{Rating, RatingValue, MAX_RATING};
use crate::domain::entities::store::Store;
use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::{
    non_blank, one_decimal, RatingEntry, RatingFilter, RatingSortField, StoreReference,
    StoreWithStats, UserActivityStats, UserFilter, UserPage, UserProfile, UserSortField,
};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{RatingRepository, StoreRepository, UserRepository};
use crate::services::auth::PasswordHasher;
use crate::services::authorization::Caller;
use crate::services::lookup::{stores_by_id, unique_ids};

use super::types::{NewUser, UserChanges};

/// How many entries the activity lists in [`UserActivityStats`] hold
const ACTIVITY_LIST_SIZE: u32 = 5;

/// Service for user profiles and administrator user management
pub struct UserService<U, S, R>
where
    U: UserRepository,
    S: StoreRepository,
    R: RatingRepository,
{
    user_repository: Arc<U>,
    store_repository: Arc<S>,
    rating_repository: Arc<R>,
    password_hasher: PasswordHasher,
    reporting: ReportingConfig,
}

impl<U, S, R> UserService<U, S, R>
where
    U: UserRepository,
    S: StoreRepository,
    R: RatingRepository,
{
    pub fn new(
        user_repository: Arc<U>,
        store_repository: Arc<S>,
        rating_repository: Arc<R>,
        password_hasher: PasswordHasher,
        reporting: ReportingConfig,
    ) -> Self {
        Self {
            user_repository,
            store_repository,
            rating_repository,
            password_hasher,
            reporting,
        }
    }

    /// A user with the stores they own
    pub async fn get_by_id(&self, user_id: Uuid) -> DomainResult<UserProfile> {
        let user = self.find_user(user_id).await?;
        let owned_stores = self.owned_stores(&user).await?;
        Ok(UserProfile { user, owned_stores })
    }

    /// Filtered, sorted user listing
    pub async fn get_all(
        &self,
        filter: UserFilter,
        sort: Sort<UserSortField>,
        pagination: Pagination,
    ) -> DomainResult<UserPage<User>> {
        let page = self
            .user_repository
            .list(&filter.normalized(), sort, pagination)
            .await?;

        Ok(UserPage {
            pagination: PaginationMeta::new(pagination, page.total),
            users: page.items,
        })
    }

    /// Administrator listing; store owners come with their stores
    pub async fn list_admin(
        &self,
        filter: UserFilter,
        sort: Sort<UserSortField>,
        pagination: Pagination,
    ) -> DomainResult<UserPage<UserProfile>> {
        let page = self
            .user_repository
            .list(&filter.normalized(), sort, pagination)
            .await?;

        let mut users = Vec::with_capacity(page.items.len());
        for user in page.items {
            let owned_stores = self.owned_stores(&user).await?;
            users.push(UserProfile { user, owned_stores });
        }

        Ok(UserPage {
            users,
            pagination: PaginationMeta::new(pagination, page.total),
        })
    }

    /// Create an account on behalf of an administrator
    pub async fn create(&self, input: NewUser) -> DomainResult<User> {
        if self.user_repository.email_exists(&input.email, None).await? {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = self.password_hasher.hash(&input.password).await?;
        let user = User::new(
            input.name,
            input.email,
            password_hash,
            non_blank(input.address),
            input.role.unwrap_or_default(),
        );

        let user = self
            .user_repository
            .create(user)
            .await
            .map_err(duplicate_email)?;

        tracing::info!(user_id = %user.id, role = %user.role, "user created");
        Ok(user)
    }

    /// Apply a partial update
    ///
    /// Role changes may not strip the last administrator, nor take
    /// `store_owner` away from someone who still owns stores.
    pub async fn update(&self, user_id: Uuid, changes: UserChanges) -> DomainResult<User> {
        let mut user = self.find_user(user_id).await?;

        if let Some(email) = changes.email {
            if !email.eq_ignore_ascii_case(&user.email)
                && self
                    .user_repository
                    .email_exists(&email, Some(user.id))
                    .await?
            {
                return Err(AuthError::UserAlreadyExists.into());
            }
            user.set_email(email);
        }

        if let Some(role) = changes.role {
            if role != user.role {
                self.ensure_role_can_change(&user).await?;
                user.set_role(role);
            }
        }

        if let Some(name) = changes.name {
            user.set_name(name);
        }
        if let Some(address) = changes.address {
            user.set_address(non_blank(Some(address)));
        }

        let user = self
            .user_repository
            .update(user)
            .await
            .map_err(duplicate_email)?;

        tracing::info!(user_id = %user.id, "user updated");
        Ok(user)
    }

    async fn ensure_role_can_change(&self, user: &User) -> DomainResult<()> {
        match user.role {
            Role::SystemAdmin => {
                if self.user_repository.count_by_role(Role::SystemAdmin).await? <= 1 {
                    return Err(DomainError::business_rule(
                        "Cannot remove the role of the last system administrator",
                    ));
                }
            }
            Role::StoreOwner => {
                if self.store_repository.count_by_owner(user.id).await? > 0 {
                    return Err(DomainError::business_rule(
                        "Cannot remove store_owner role from a user who still owns stores",
                    ));
                }
            }
            Role::NormalUser => {}
        }
        Ok(())
    }

    /// Delete `target_id` on behalf of `caller`
    ///
    /// Refused for the caller's own account, the last administrator and
    /// anyone who still owns stores. The user's ratings go with them.
    pub async fn delete(&self, caller: &Caller, target_id: Uuid) -> DomainResult<()> {
        if caller.id == target_id {
            return Err(DomainError::business_rule("You cannot delete your own account"));
        }

        let user = self.find_user(target_id).await?;

        if user.role == Role::SystemAdmin
            && self.user_repository.count_by_role(Role::SystemAdmin).await? <= 1
        {
            return Err(DomainError::business_rule(
                "Cannot delete the last system administrator",
            ));
        }

        if self.store_repository.count_by_owner(user.id).await? > 0 {
            return Err(DomainError::business_rule(
                "Cannot delete a user who still owns stores",
            ));
        }

        let removed = self.rating_repository.delete_by_user(user.id).await?;
        if !self.user_repository.delete(user.id).await? {
            return Err(DomainError::not_found("User"));
        }

        tracing::info!(user_id = %target_id, deleted_by = %caller.id, ratings_removed = removed, "user deleted");
        Ok(())
    }

    /// Rating activity of one user
    pub async fn user_stats(&self, user_id: Uuid) -> DomainResult<UserActivityStats> {
        let filter = RatingFilter::for_user(user_id);
        let aggregate = self.rating_repository.aggregate(&filter).await?;

        let since = Utc::now() - Duration::days(self.reporting.user_activity_days);
        let recent = self
            .rating_repository
            .aggregate(&RatingFilter {
                created_since: Some(since),
                ..filter.clone()
            })
            .await?;

        let newest_first = Sort::new(RatingSortField::CreatedAt, SortOrder::Desc);
        let top = Pagination::new(1, ACTIVITY_LIST_SIZE);
        let favorites = self
            .rating_repository
            .list(
                &RatingFilter {
                    rating: RatingValue::new(i64::from(MAX_RATING)).ok(),
                    ..filter.clone()
                },
                newest_first,
                top,
            )
            .await?
            .items;
        let latest = self
            .rating_repository
            .list(&filter, newest_first, top)
            .await?
            .items;

        let store_ids = unique_ids(favorites.iter().chain(&latest).map(|r| r.store_id));
        let stores = stores_by_id(self.store_repository.as_ref(), &store_ids).await?;
        let with_store = |rating: Rating| {
            let store = stores.get(&rating.store_id).map(StoreReference::new);
            RatingEntry::new(rating).with_store(store)
        };

        Ok(UserActivityStats {
            total_ratings: aggregate.count,
            total_stores_rated: aggregate.distinct_stores,
            average_rating_given: one_decimal(aggregate.mean),
            ratings_this_month: recent.count,
            favorite_stores: favorites.into_iter().map(&with_store).collect(),
            latest_ratings: latest.into_iter().map(&with_store).collect(),
        })
    }

    async fn find_user(&self, user_id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    async fn owned_stores(&self, user: &User) -> DomainResult<Vec<StoreWithStats>> {
        if !user.is_store_owner() {
            return Ok(Vec::new());
        }

        let stores: Vec<Store> = self.store_repository.find_by_owner(user.id).await?;
        let store_ids: Vec<Uuid> = stores.iter().map(|s| s.id).collect();
        let summaries = self.rating_repository.store_summaries(&store_ids).await?;

        Ok(stores
            .into_iter()
            .map(|store| {
                let summary = summaries.get(&store.id).copied().unwrap_or_default();
                StoreWithStats::new(store, summary)
            })
            .collect())
    }
}

fn duplicate_email(error: DomainError) -> DomainError {
    match error {
        DomainError::Conflict { .. } => AuthError::UserAlreadyExists.into(),
        other => other,
    }
}
