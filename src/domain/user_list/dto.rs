use serde::{Deserialize, Serialize};

use super::model::{ListPage, UserList};

pub const CONTENT_ID_REQUIRED: &str = "Content ID is required.";
pub const CONTENT_ID_REQUIRED_IN_PATH: &str = "Content ID is required in path.";
pub const ITEM_ADDED_TO_NEW_LIST: &str = "Item added to new list successfully.";
pub const ITEM_ADDED: &str = "Item added to list successfully.";
pub const ITEM_ALREADY_IN_LIST: &str = "Item already in your list.";
pub const ITEM_REMOVED: &str = "Item removed from list successfully.";
pub const ITEM_NOT_FOUND: &str = "Item not found in your list.";
pub const LIST_NOT_FOUND: &str = "User list not found for this user.";
pub const LIST_EMPTY: &str = "Your list is empty.";
pub const LIST_RETRIEVED: &str = "My list retrieved successfully.";

/// Body of POST /api/my-list/add
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    #[serde(default)]
    pub content_id: Option<String>,
}

/// Query of GET /api/my-list. Kept as strings so bad values fall back to
/// defaults instead of rejecting the request.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListItemsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListItemsQuery {
    /// First occurrence of each key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

/// Response for add and remove
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListResponse {
    pub message: String,
    pub user_list: UserList,
}

impl UserListResponse {
    pub fn new(message: &str, user_list: UserList) -> Self {
        Self {
            message: message.to_string(),
            user_list,
        }
    }
}

/// Response for GET /api/my-list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemsResponse {
    pub message: String,
    pub items: Vec<String>,
    pub total_items: u64,
    pub current_page: u64,
    pub total_pages: u64,
}

impl From<ListPage> for ListItemsResponse {
    fn from(page: ListPage) -> Self {
        let message = if page.is_empty_list() {
            LIST_EMPTY
        } else {
            LIST_RETRIEVED
        };

        Self {
            message: message.to_string(),
            items: page.items,
            total_items: page.total_items,
            current_page: page.current_page,
            total_pages: page.total_pages,
        }
    }
}
