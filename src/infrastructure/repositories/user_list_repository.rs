use crate::infrastructure::db::{check_connection, DbPool};
use crate::{
    domain::user_list::{UserList, UserListRepository},
    error::AppResult,
};
use async_trait::async_trait;
use std::sync::Arc;

pub struct PgUserListRepository {
    pool: Arc<DbPool>,
}

impl PgUserListRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserListRepository for PgUserListRepository {
    async fn find_by_user(&self, user_id: &str) -> AppResult<Option<UserList>> {
        let pool = self.pool.as_ref();
        let list = sqlx::query_as::<_, UserList>(
            r#"
            SELECT user_id, content_ids, created_at, updated_at
            FROM user_lists
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(list)
    }

    async fn create(&self, user_id: &str, content_id: &str) -> AppResult<Option<UserList>> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        let list = sqlx::query_as::<_, UserList>(
            r#"
            INSERT INTO user_lists (user_id, content_ids, created_at, updated_at)
            VALUES ($1, $2, $3, $3)
            ON CONFLICT (user_id) DO NOTHING
            RETURNING user_id, content_ids, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(vec![content_id.to_string()])
        .bind(now)
        .fetch_optional(pool)
        .await?;

        Ok(list)
    }

    async fn append_if_absent(
        &self,
        user_id: &str,
        content_id: &str,
    ) -> AppResult<Option<UserList>> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        let list = sqlx::query_as::<_, UserList>(
            r#"
            UPDATE user_lists
            SET content_ids = array_append(content_ids, $2::TEXT), updated_at = $3
            WHERE user_id = $1 AND NOT ($2::TEXT = ANY(content_ids))
            RETURNING user_id, content_ids, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(content_id)
        .bind(now)
        .fetch_optional(pool)
        .await?;

        Ok(list)
    }

    async fn remove_item(&self, user_id: &str, content_id: &str) -> AppResult<Option<UserList>> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        let list = sqlx::query_as::<_, UserList>(
            r#"
            UPDATE user_lists
            SET content_ids = array_remove(content_ids, $2::TEXT), updated_at = $3
            WHERE user_id = $1 AND $2::TEXT = ANY(content_ids)
            RETURNING user_id, content_ids, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(content_id)
        .bind(now)
        .fetch_optional(pool)
        .await?;

        Ok(list)
    }

    async fn replace(&self, user_id: &str, content_ids: &[String]) -> AppResult<UserList> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        let list = sqlx::query_as::<_, UserList>(
            r#"
            INSERT INTO user_lists (user_id, content_ids, created_at, updated_at)
            VALUES ($1, $2, $3, $3)
            ON CONFLICT (user_id)
            DO UPDATE SET content_ids = EXCLUDED.content_ids, updated_at = EXCLUDED.updated_at
            RETURNING user_id, content_ids, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(content_ids)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(list)
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let pool = self.pool.as_ref();
        let result = sqlx::query("DELETE FROM user_lists").execute(pool).await?;

        Ok(result.rows_affected())
    }

    async fn check_connection(&self) -> AppResult<()> {
        check_connection(&self.pool).await?;
        Ok(())
    }
}
