use crate::{
    domain::user_list::{UserList, UserListRepository},
    error::AppResult,
};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local store keyed by user id. Each call holds the lock for its
/// whole read-check-write, giving the same per-record atomicity as the
/// conditional SQL statements.
#[derive(Default)]
pub struct InMemoryUserListRepository {
    lists: RwLock<HashMap<String, UserList>>,
}

impl InMemoryUserListRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserListRepository for InMemoryUserListRepository {
    async fn find_by_user(&self, user_id: &str) -> AppResult<Option<UserList>> {
        Ok(self.lists.read().await.get(user_id).cloned())
    }

    async fn create(&self, user_id: &str, content_id: &str) -> AppResult<Option<UserList>> {
        let mut lists = self.lists.write().await;
        if lists.contains_key(user_id) {
            return Ok(None);
        }

        let now = Utc::now();
        let list = UserList {
            user_id: user_id.to_string(),
            content_ids: vec![content_id.to_string()],
            created_at: now,
            updated_at: now,
        };
        lists.insert(user_id.to_string(), list.clone());

        Ok(Some(list))
    }

    async fn append_if_absent(
        &self,
        user_id: &str,
        content_id: &str,
    ) -> AppResult<Option<UserList>> {
        let mut lists = self.lists.write().await;
        let Some(list) = lists.get_mut(user_id) else {
            return Ok(None);
        };
        if list.contains(content_id) {
            return Ok(None);
        }

        list.content_ids.push(content_id.to_string());
        list.updated_at = Utc::now();

        Ok(Some(list.clone()))
    }

    async fn remove_item(&self, user_id: &str, content_id: &str) -> AppResult<Option<UserList>> {
        let mut lists = self.lists.write().await;
        let Some(list) = lists.get_mut(user_id) else {
            return Ok(None);
        };

        let before = list.content_ids.len();
        list.content_ids.retain(|id| id != content_id);
        if list.content_ids.len() == before {
            return Ok(None);
        }
        list.updated_at = Utc::now();

        Ok(Some(list.clone()))
    }

    async fn replace(&self, user_id: &str, content_ids: &[String]) -> AppResult<UserList> {
        let mut lists = self.lists.write().await;
        let now = Utc::now();

        let list = lists
            .entry(user_id.to_string())
            .and_modify(|list| {
                list.content_ids = content_ids.to_vec();
                list.updated_at = now;
            })
            .or_insert_with(|| UserList {
                user_id: user_id.to_string(),
                content_ids: content_ids.to_vec(),
                created_at: now,
                updated_at: now,
            });

        Ok(list.clone())
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let mut lists = self.lists.write().await;
        let removed = lists.len() as u64;
        lists.clear();
        Ok(removed)
    }

    async fn check_connection(&self) -> AppResult<()> {
        Ok(())
    }
}
