pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{AddItemRequest, ListItemsQuery, ListItemsResponse, UserListResponse};
pub use error::ListServiceError;
pub use model::{ListPage, PageRequest, UserList};
pub use service::{AddOutcome, ListService, ListServiceApi};

use crate::error::AppResult;
use async_trait::async_trait;

/// Persistence seam for user lists. One record per user id.
///
/// Every mutating call is conditional: it re-checks its precondition inside
/// the store and returns `None` when the precondition no longer holds, so
/// concurrent writers cannot silently overwrite each other.
#[async_trait]
pub trait UserListRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &str) -> AppResult<Option<UserList>>;

    /// Create a list holding only `content_id`.
    /// Returns `None` if the user already has a list.
    async fn create(&self, user_id: &str, content_id: &str) -> AppResult<Option<UserList>>;

    /// Append `content_id` to the end of an existing list.
    /// Returns `None` if there is no list or the id is already in it.
    async fn append_if_absent(&self, user_id: &str, content_id: &str)
        -> AppResult<Option<UserList>>;

    /// Remove every occurrence of `content_id`.
    /// Returns `None` if there is no list or nothing matched.
    async fn remove_item(&self, user_id: &str, content_id: &str) -> AppResult<Option<UserList>>;

    /// Overwrite (or create) the list for `user_id`
    async fn replace(&self, user_id: &str, content_ids: &[String]) -> AppResult<UserList>;

    /// Delete every list, returning how many were removed
    async fn delete_all(&self) -> AppResult<u64>;

    async fn check_connection(&self) -> AppResult<()>;
}
