//! MySQL implementation of the StoreRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySql, MySqlPool, QueryBuilder, Row};
use uuid::Uuid;

use sr_core::domain::entities::store::Store;
use sr_core::domain::value_objects::{StoreFilter, StoreSortField};
use sr_core::errors::DomainError;
use sr_core::repositories::StoreRepository;
use sr_shared::types::{Page, Pagination, Sort};

use super::{
    column, is_foreign_key_violation, is_unique_violation, like_pattern, parse_uuid, push_in_list,
    query_failed, to_count,
};

const STORE_COLUMNS: &str = "id, name, email, address, owner_id, created_at, updated_at";

/// MySQL implementation of StoreRepository
pub struct MySqlStoreRepository {
    pool: MySqlPool,
}

impl MySqlStoreRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_store(row: &MySqlRow) -> Result<Store, DomainError> {
        let id: String = row.try_get("id").map_err(column("id"))?;
        let owner_id: String = row.try_get("owner_id").map_err(column("owner_id"))?;

        Ok(Store {
            id: parse_uuid(&id)?,
            name: row.try_get("name").map_err(column("name"))?,
            email: row.try_get("email").map_err(column("email"))?,
            address: row.try_get("address").map_err(column("address"))?,
            owner_id: parse_uuid(&owner_id)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(column("created_at"))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(column("updated_at"))?,
        })
    }

    /// Append the WHERE clause for a store filter. The caller has already
    /// handled an empty owner list.
    fn push_filter(builder: &mut QueryBuilder<'_, MySql>, filter: &StoreFilter) {
        builder.push(" WHERE 1 = 1");
        if let Some(name) = &filter.name {
            builder.push(" AND LOWER(name) LIKE ").push_bind(like_pattern(name));
        }
        if let Some(address) = &filter.address {
            builder
                .push(" AND LOWER(address) LIKE ")
                .push_bind(like_pattern(address));
        }
        if let Some(owner_ids) = &filter.owner_ids {
            builder.push(" AND ");
            push_in_list(builder, "owner_id", owner_ids);
        }
    }

    fn map_write_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
        move |e| {
            if is_unique_violation(&e) {
                DomainError::conflict("Store with this email already exists")
            } else if is_foreign_key_violation(&e) {
                DomainError::business_rule("Owner not found")
            } else {
                query_failed(context)(e)
            }
        }
    }
}

#[async_trait]
impl StoreRepository for MySqlStoreRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Store>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM stores WHERE id = ?", STORE_COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed("find store by id"))?;

        row.as_ref().map(Self::row_to_store).transpose()
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Store>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder =
            QueryBuilder::<MySql>::new(format!("SELECT {} FROM stores WHERE ", STORE_COLUMNS));
        push_in_list(&mut builder, "id", ids);

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("find stores by ids"))?;

        rows.iter().map(Self::row_to_store).collect()
    }

    async fn create(&self, store: Store) -> Result<Store, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO stores (id, name, email, address, owner_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(store.id.to_string())
        .bind(&store.name)
        .bind(&store.email)
        .bind(&store.address)
        .bind(store.owner_id.to_string())
        .bind(store.created_at)
        .bind(store.updated_at)
        .execute(&self.pool)
        .await
        .map_err(Self::map_write_error("create store"))?;

        tracing::info!(store_id = %store.id, owner_id = %store.owner_id, "Store created");
        Ok(store)
    }

    async fn update(&self, store: Store) -> Result<Store, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE stores
            SET name = ?, email = ?, address = ?, owner_id = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&store.name)
        .bind(&store.email)
        .bind(&store.address)
        .bind(store.owner_id.to_string())
        .bind(store.updated_at)
        .bind(store.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(Self::map_write_error("update store"))?;

        if result.rows_affected() == 0 && self.find_by_id(store.id).await?.is_none() {
            return Err(DomainError::not_found("Store"));
        }

        Ok(store)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM stores WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed("delete store"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn email_exists(&self, email: &str, excluding: Option<Uuid>) -> Result<bool, DomainError> {
        let mut builder =
            QueryBuilder::<MySql>::new("SELECT EXISTS(SELECT 1 FROM stores WHERE email = ");
        builder.push_bind(email.to_string());
        if let Some(excluded) = excluding {
            builder.push(" AND id <> ").push_bind(excluded.to_string());
        }
        builder.push(")");

        let exists: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed("check store email"))?;

        Ok(exists == 1)
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Store>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM stores WHERE owner_id = ? ORDER BY created_at DESC, id ASC",
            STORE_COLUMNS
        ))
        .bind(owner_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed("find stores by owner"))?;

        rows.iter().map(Self::row_to_store).collect()
    }

    async fn count_by_owner(&self, owner_id: Uuid) -> Result<u64, DomainError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stores WHERE owner_id = ?")
            .bind(owner_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed("count stores by owner"))?;

        Ok(to_count(total))
    }

    async fn list(
        &self,
        filter: &StoreFilter,
        sort: Sort<StoreSortField>,
        pagination: Pagination,
    ) -> Result<Page<Store>, DomainError> {
        if filter.matches_nothing() {
            return Ok(Page::empty());
        }

        let mut count_query = QueryBuilder::<MySql>::new("SELECT COUNT(*) FROM stores");
        Self::push_filter(&mut count_query, filter);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed("count stores"))?;

        if total == 0 {
            return Ok(Page::empty());
        }

        let mut builder = QueryBuilder::<MySql>::new(format!("SELECT {} FROM stores", STORE_COLUMNS));
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
            .map_err(query_failed("list stores"))?;

        let stores = rows.iter().map(Self::row_to_store).collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(stores, to_count(total)))
    }

    async fn find_ids_by_name(&self, fragment: &str) -> Result<Vec<Uuid>, DomainError> {
        let ids: Vec<String> = sqlx::query_scalar("SELECT id FROM stores WHERE LOWER(name) LIKE ?")
            .bind(like_pattern(fragment))
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("find stores by name"))?;

        ids.iter().map(|id| parse_uuid(id)).collect()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stores")
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed("count stores"))?;

        Ok(to_count(total))
    }

    async fn count_created_since(&self, since: DateTime<Utc>) -> Result<u64, DomainError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stores WHERE created_at >= ?")
            .bind(since)
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed("count recent stores"))?;

        Ok(to_count(total))
    }
}
