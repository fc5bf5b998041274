//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySql, MySqlPool, QueryBuilder, Row};
use uuid::Uuid;

use sr_core::domain::entities::user::{Role, User};
use sr_core::domain::value_objects::{UserFilter, UserSortField};
use sr_core::errors::DomainError;
use sr_core::repositories::UserRepository;
use sr_shared::types::{Page, Pagination, Sort};

use super::{column, is_unique_violation, like_pattern, parse_uuid, push_in_list, query_failed, to_count};

const USER_COLUMNS: &str =
    "id, name, email, password_hash, address, role, created_at, updated_at";

const DUPLICATE_EMAIL: &str = "User with this email already exists";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(column("id"))?;
        let role: String = row.try_get("role").map_err(column("role"))?;

        Ok(User {
            id: parse_uuid(&id)?,
            name: row.try_get("name").map_err(column("name"))?,
            email: row.try_get("email").map_err(column("email"))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(column("password_hash"))?,
            address: row.try_get("address").map_err(column("address"))?,
            role: role
                .parse::<Role>()
                .map_err(|e| DomainError::internal(format!("Invalid role in database: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(column("created_at"))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(column("updated_at"))?,
        })
    }

    /// Append the WHERE clause for a user filter
    fn push_filter(builder: &mut QueryBuilder<'_, MySql>, filter: &UserFilter) {
        builder.push(" WHERE 1 = 1");
        if let Some(name) = &filter.name {
            builder.push(" AND LOWER(name) LIKE ").push_bind(like_pattern(name));
        }
        if let Some(email) = &filter.email {
            builder.push(" AND LOWER(email) LIKE ").push_bind(like_pattern(email));
        }
        if let Some(address) = &filter.address {
            builder
                .push(" AND LOWER(address) LIKE ")
                .push_bind(like_pattern(address));
        }
        if let Some(role) = filter.role {
            builder.push(" AND role = ").push_bind(role.as_str());
        }
    }

    fn map_write_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
        move |e| {
            if is_unique_violation(&e) {
                DomainError::conflict(DUPLICATE_EMAIL)
            } else {
                query_failed(context)(e)
            }
        }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed("find user by id"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM users WHERE email = ?", USER_COLUMNS))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed("find user by email"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<MySql>::new(format!("SELECT {} FROM users WHERE ", USER_COLUMNS));
        push_in_list(&mut builder, "id", ids);

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("find users by ids"))?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, address, role, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.address.as_deref())
        .bind(user.role.as_str())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(Self::map_write_error("create user"))?;

        tracing::info!(user_id = %user.id, role = user.role.as_str(), "User created");
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = ?, email = ?, password_hash = ?, address = ?, role = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.address.as_deref())
        .bind(user.role.as_str())
        .bind(user.updated_at)
        .bind(user.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(Self::map_write_error("update user"))?;

        // MySQL reports matched-but-unchanged rows as 0 affected
        if result.rows_affected() == 0 && self.find_by_id(user.id).await?.is_none() {
            return Err(DomainError::not_found("User"));
        }

        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if super::is_foreign_key_violation(&e) {
                    DomainError::business_rule("Cannot delete a user who still owns stores")
                } else {
                    query_failed("delete user")(e)
                }
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn email_exists(&self, email: &str, excluding: Option<Uuid>) -> Result<bool, DomainError> {
        let mut builder =
            QueryBuilder::<MySql>::new("SELECT EXISTS(SELECT 1 FROM users WHERE email = ");
        builder.push_bind(email.to_string());
        if let Some(excluded) = excluding {
            builder.push(" AND id <> ").push_bind(excluded.to_string());
        }
        builder.push(")");

        let exists: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed("check user email"))?;

        Ok(exists == 1)
    }

    async fn list(
        &self,
        filter: &UserFilter,
        sort: Sort<UserSortField>,
        pagination: Pagination,
    ) -> Result<Page<User>, DomainError> {
        let mut count_query = QueryBuilder::<MySql>::new("SELECT COUNT(*) FROM users");
        Self::push_filter(&mut count_query, filter);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed("count users"))?;

        if total == 0 {
            return Ok(Page::empty());
        }

        let mut builder = QueryBuilder::<MySql>::new(format!("SELECT {} FROM users", USER_COLUMNS));
        Self::push_filter(&mut builder, filter);
        builder.push(format!(" ORDER BY {}, id ASC", sort.to_sql()));
        builder
            .push(" LIMIT ")
            .push_bind(pagination.limit_i64())
            .push(" OFFSET ")
            .push_bind(pagination.offset_i64());

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("list users"))?;

        let users = rows.iter().map(Self::row_to_user).collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(users, to_count(total)))
    }

    async fn find_ids_by_name(&self, fragment: &str) -> Result<Vec<Uuid>, DomainError> {
        let ids: Vec<String> = sqlx::query_scalar("SELECT id FROM users WHERE LOWER(name) LIKE ?")
            .bind(like_pattern(fragment))
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("find users by name"))?;

        ids.iter().map(|id| parse_uuid(id)).collect()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed("count users"))?;

        Ok(to_count(total))
    }

    async fn count_by_role(&self, role: Role) -> Result<u64, DomainError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = ?")
            .bind(role.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed("count users by role"))?;

        Ok(to_count(total))
    }

    async fn count_created_since(&self, since: DateTime<Utc>) -> Result<u64, DomainError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE created_at >= ?")
            .bind(since)
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed("count recent users"))?;

        Ok(to_count(total))
    }
}
