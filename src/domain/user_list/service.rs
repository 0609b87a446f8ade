use super::error::ListServiceError;
use super::model::{ListPage, PageRequest, UserList};
use super::UserListRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Result of a successful add
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// The user had no list; one was created holding the item
    Created(UserList),
    /// The item was appended to the existing list
    Updated(UserList),
}

impl AddOutcome {
    pub fn into_user_list(self) -> UserList {
        match self {
            AddOutcome::Created(list) | AddOutcome::Updated(list) => list,
        }
    }
}

pub struct ListService {
    repository: Arc<dyn UserListRepository>,
}

impl ListService {
    pub fn new(repository: Arc<dyn UserListRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
pub trait ListServiceApi: Send + Sync {
    async fn add_item(&self, user_id: &str, content_id: &str)
        -> Result<AddOutcome, ListServiceError>;

    async fn remove_item(&self, user_id: &str, content_id: &str)
        -> Result<UserList, ListServiceError>;

    async fn list_items(&self, user_id: &str, page: PageRequest)
        -> Result<ListPage, ListServiceError>;
}

#[async_trait]
impl ListServiceApi for ListService {
    async fn add_item(
        &self,
        user_id: &str,
        content_id: &str,
    ) -> Result<AddOutcome, ListServiceError> {
        if content_id.is_empty() {
            return Err(ListServiceError::missing_content_id());
        }

        match self.find_list(user_id).await? {
            None => {
                if let Some(list) = self.repository.create(user_id, content_id).await? {
                    tracing::info!(user_id, content_id, "Created user list");
                    return Ok(AddOutcome::Created(list));
                }
                // Lost a creation race; the list exists now, so append to it.
                tracing::debug!(user_id, "User list appeared concurrently");
            }
            Some(list) if list.contains(content_id) => {
                return Err(ListServiceError::Duplicate);
            }
            Some(_) => {}
        }

        let list = self
            .repository
            .append_if_absent(user_id, content_id)
            .await?
            .ok_or(ListServiceError::Duplicate)?;

        tracing::info!(
            user_id,
            content_id,
            total_items = list.content_ids.len(),
            "Appended item to user list"
        );
        Ok(AddOutcome::Updated(list))
    }

    async fn remove_item(
        &self,
        user_id: &str,
        content_id: &str,
    ) -> Result<UserList, ListServiceError> {
        if content_id.is_empty() {
            return Err(ListServiceError::missing_path_content_id());
        }

        let list = self
            .find_list(user_id)
            .await?
            .ok_or(ListServiceError::ListNotFound)?;

        if !list.contains(content_id) {
            return Err(ListServiceError::ItemNotFound);
        }

        let list = self
            .repository
            .remove_item(user_id, content_id)
            .await?
            .ok_or(ListServiceError::ItemNotFound)?;

        tracing::info!(
            user_id,
            content_id,
            total_items = list.content_ids.len(),
            "Removed item from user list"
        );
        Ok(list)
    }

    async fn list_items(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<ListPage, ListServiceError> {
        tracing::debug!(user_id, page = page.page, limit = page.limit, "Listing items");

        let result = match self.find_list(user_id).await? {
            Some(list) if !list.content_ids.is_empty() => ListPage::slice(&list.content_ids, page),
            _ => ListPage::empty(page),
        };

        Ok(result)
    }
}

impl ListService {
    async fn find_list(&self, user_id: &str) -> Result<Option<UserList>, ListServiceError> {
        Ok(self.repository.find_by_user(user_id).await?)
    }
}
