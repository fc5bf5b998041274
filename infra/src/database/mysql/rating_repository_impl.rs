//! MySQL implementation of the RatingRepository trait.
//!
//! Averages are computed by MySQL; rounding for display happens in
//! [`AverageRating`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySql, MySqlPool, QueryBuilder, Row};
use std::collections::HashMap;
use uuid::Uuid;

use sr_core::domain::entities::rating::{Rating, RatingValue};
use sr_core::domain::value_objects::{
    AverageRating, RatingAggregate, RatingFilter, RatingSortField, StoreRatingSummary,
};
use sr_core::errors::DomainError;
use sr_core::repositories::RatingRepository;
use sr_shared::types::{Page, Pagination, Sort};

use super::{
    column, is_foreign_key_violation, is_unique_violation, parse_uuid, push_in_list, query_failed,
    to_count,
};

const RATING_COLUMNS: &str = "id, user_id, store_id, rating, created_at, updated_at";

/// MySQL implementation of RatingRepository
pub struct MySqlRatingRepository {
    pool: MySqlPool,
}

impl MySqlRatingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_rating(row: &MySqlRow) -> Result<Rating, DomainError> {
        let id: String = row.try_get("id").map_err(column("id"))?;
        let user_id: String = row.try_get("user_id").map_err(column("user_id"))?;
        let store_id: String = row.try_get("store_id").map_err(column("store_id"))?;
        let value: u8 = row.try_get("rating").map_err(column("rating"))?;

        Ok(Rating {
            id: parse_uuid(&id)?,
            user_id: parse_uuid(&user_id)?,
            store_id: parse_uuid(&store_id)?,
            rating: RatingValue::new(i64::from(value))
                .map_err(|e| DomainError::internal(format!("Invalid rating in database: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(column("created_at"))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(column("updated_at"))?,
        })
    }

    /// `(store_id, COUNT, SUM)` rows into per-store summaries
    fn row_to_summary(row: &MySqlRow) -> Result<(Uuid, StoreRatingSummary), DomainError> {
        let store_id: String = row.try_get("store_id").map_err(column("store_id"))?;
        let total: i64 = row.try_get("total").map_err(column("total"))?;
        let sum: u64 = row.try_get("rating_sum").map_err(column("rating_sum"))?;
        let total = to_count(total);

        Ok((
            parse_uuid(&store_id)?,
            StoreRatingSummary {
                average_rating: AverageRating::from_sum(sum, total),
                total_ratings: total,
            },
        ))
    }

    /// Append the WHERE clause for a rating filter. The caller has already
    /// handled empty id lists.
    fn push_filter(builder: &mut QueryBuilder<'_, MySql>, filter: &RatingFilter) {
        builder.push(" WHERE 1 = 1");
        if let Some(user_id) = filter.user_id {
            builder.push(" AND user_id = ").push_bind(user_id.to_string());
        }
        if let Some(store_id) = filter.store_id {
            builder.push(" AND store_id = ").push_bind(store_id.to_string());
        }
        if let Some(rating) = filter.rating {
            builder.push(" AND rating = ").push_bind(rating.get());
        }
        if let Some(user_ids) = &filter.user_ids {
            builder.push(" AND ");
            push_in_list(builder, "user_id", user_ids);
        }
        if let Some(store_ids) = &filter.store_ids {
            builder.push(" AND ");
            push_in_list(builder, "store_id", store_ids);
        }
        if let Some(since) = filter.created_since {
            builder.push(" AND created_at >= ").push_bind(since);
        }
    }

    async fn delete_where(&self, column_name: &str, id: Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query(&format!("DELETE FROM ratings WHERE {} = ?", column_name))
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed("delete ratings"))?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl RatingRepository for MySqlRatingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Rating>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM ratings WHERE id = ?", RATING_COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed("find rating by id"))?;

        row.as_ref().map(Self::row_to_rating).transpose()
    }

    async fn find_by_user_and_store(
        &self,
        user_id: Uuid,
        store_id: Uuid,
    ) -> Result<Option<Rating>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM ratings WHERE user_id = ? AND store_id = ?",
            RATING_COLUMNS
        ))
        .bind(user_id.to_string())
        .bind(store_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed("find rating by user and store"))?;

        row.as_ref().map(Self::row_to_rating).transpose()
    }

    async fn create(&self, rating: Rating) -> Result<Rating, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO ratings (id, user_id, store_id, rating, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(rating.id.to_string())
        .bind(rating.user_id.to_string())
        .bind(rating.store_id.to_string())
        .bind(rating.rating.get())
        .bind(rating.created_at)
        .bind(rating.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::conflict("Rating already exists for this user and store")
            } else if is_foreign_key_violation(&e) {
                DomainError::not_found("Store")
            } else {
                query_failed("create rating")(e)
            }
        })?;

        tracing::info!(
            rating_id = %rating.id,
            store_id = %rating.store_id,
            value = rating.rating.get(),
            "Rating created"
        );
        Ok(rating)
    }

    async fn update(&self, rating: Rating) -> Result<Rating, DomainError> {
        let result = sqlx::query("UPDATE ratings SET rating = ?, updated_at = ? WHERE id = ?")
            .bind(rating.rating.get())
            .bind(rating.updated_at)
            .bind(rating.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed("update rating"))?;

        if result.rows_affected() == 0 && self.find_by_id(rating.id).await?.is_none() {
            return Err(DomainError::not_found("Rating"));
        }

        Ok(rating)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.delete_where("id", id).await? > 0)
    }

    async fn delete_by_store(&self, store_id: Uuid) -> Result<u64, DomainError> {
        self.delete_where("store_id", store_id).await
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<u64, DomainError> {
        self.delete_where("user_id", user_id).await
    }

    async fn list(
        &self,
        filter: &RatingFilter,
        sort: Sort<RatingSortField>,
        pagination: Pagination,
    ) -> Result<Page<Rating>, DomainError> {
        if filter.matches_nothing() {
            return Ok(Page::empty());
        }

        let mut count_query = QueryBuilder::<MySql>::new("SELECT COUNT(*) FROM ratings");
        Self::push_filter(&mut count_query, filter);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed("count ratings"))?;

        if total == 0 {
            return Ok(Page::empty());
        }

        let mut builder =
            QueryBuilder::<MySql>::new(format!("SELECT {} FROM ratings", RATING_COLUMNS));
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
            .map_err(query_failed("list ratings"))?;

        let ratings = rows.iter().map(Self::row_to_rating).collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(ratings, to_count(total)))
    }

    async fn find_by_store(&self, store_id: Uuid) -> Result<Vec<Rating>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM ratings WHERE store_id = ? ORDER BY created_at DESC, id ASC",
            RATING_COLUMNS
        ))
        .bind(store_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed("find ratings by store"))?;

        rows.iter().map(Self::row_to_rating).collect()
    }

    async fn find_by_user_for_stores(
        &self,
        user_id: Uuid,
        store_ids: &[Uuid],
    ) -> Result<Vec<Rating>, DomainError> {
        if store_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<MySql>::new(format!(
            "SELECT {} FROM ratings WHERE user_id = ",
            RATING_COLUMNS
        ));
        builder.push_bind(user_id.to_string()).push(" AND ");
        push_in_list(&mut builder, "store_id", store_ids);

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("find user ratings for stores"))?;

        rows.iter().map(Self::row_to_rating).collect()
    }

    async fn aggregate(&self, filter: &RatingFilter) -> Result<RatingAggregate, DomainError> {
        if filter.matches_nothing() {
            return Ok(RatingAggregate::default());
        }

        let mut builder = QueryBuilder::<MySql>::new(
            r#"
            SELECT COUNT(*) AS total,
                   CAST(AVG(rating) AS DOUBLE) AS mean,
                   CAST(MIN(rating) AS UNSIGNED) AS min_rating,
                   CAST(MAX(rating) AS UNSIGNED) AS max_rating,
                   COUNT(DISTINCT store_id) AS distinct_stores
            FROM ratings"#,
        );
        Self::push_filter(&mut builder, filter);

        let row = builder
            .build()
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed("aggregate ratings"))?;

        let total: i64 = row.try_get("total").map_err(column("total"))?;
        let mean: Option<f64> = row.try_get("mean").map_err(column("mean"))?;
        let min: Option<u64> = row.try_get("min_rating").map_err(column("min_rating"))?;
        let max: Option<u64> = row.try_get("max_rating").map_err(column("max_rating"))?;
        let distinct_stores: i64 = row
            .try_get("distinct_stores")
            .map_err(column("distinct_stores"))?;

        Ok(RatingAggregate {
            count: to_count(total),
            mean,
            min: min.and_then(|v| u8::try_from(v).ok()),
            max: max.and_then(|v| u8::try_from(v).ok()),
            distinct_stores: to_count(distinct_stores),
        })
    }

    async fn store_summaries(
        &self,
        store_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, StoreRatingSummary>, DomainError> {
        if store_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut builder = QueryBuilder::<MySql>::new(
            "SELECT store_id, COUNT(*) AS total, CAST(SUM(rating) AS UNSIGNED) AS rating_sum \
             FROM ratings WHERE ",
        );
        push_in_list(&mut builder, "store_id", store_ids);
        builder.push(" GROUP BY store_id");

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("summarize store ratings"))?;

        rows.iter().map(Self::row_to_summary).collect()
    }

    async fn distribution(&self) -> Result<Vec<(u8, u64)>, DomainError> {
        let rows = sqlx::query(
            "SELECT rating, COUNT(*) AS total FROM ratings GROUP BY rating ORDER BY rating",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed("load rating distribution"))?;

        rows.iter()
            .map(|row| {
                let rating: u8 = row.try_get("rating").map_err(column("rating"))?;
                let total: i64 = row.try_get("total").map_err(column("total"))?;
                Ok((rating, to_count(total)))
            })
            .collect()
    }

    async fn top_rated_stores(
        &self,
        limit: u32,
    ) -> Result<Vec<(Uuid, StoreRatingSummary)>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT store_id, COUNT(*) AS total, CAST(SUM(rating) AS UNSIGNED) AS rating_sum
            FROM ratings
            GROUP BY store_id
            ORDER BY AVG(rating) DESC, total DESC, store_id ASC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed("rank stores by rating"))?;

        rows.iter().map(Self::row_to_summary).collect()
    }
}
