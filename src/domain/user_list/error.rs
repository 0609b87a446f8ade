use crate::error::AppError;

use super::dto::{
    CONTENT_ID_REQUIRED, CONTENT_ID_REQUIRED_IN_PATH, ITEM_ALREADY_IN_LIST, ITEM_NOT_FOUND,
    LIST_NOT_FOUND,
};

#[derive(Debug, thiserror::Error)]
pub enum ListServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("item already in list")]
    Duplicate,
    #[error("user list not found")]
    ListNotFound,
    #[error("item not found in list")]
    ItemNotFound,
}

impl ListServiceError {
    pub fn missing_content_id() -> Self {
        Self::Invalid(CONTENT_ID_REQUIRED.to_string())
    }

    pub fn missing_path_content_id() -> Self {
        Self::Invalid(CONTENT_ID_REQUIRED_IN_PATH.to_string())
    }
}

/// Store failures keep the driver's own message, without the `AppError` prefix
impl From<AppError> for ListServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Database(inner) => ListServiceError::Dependency(inner.to_string()),
            other => ListServiceError::Dependency(other.to_string()),
        }
    }
}

impl From<ListServiceError> for AppError {
    fn from(err: ListServiceError) -> Self {
        match err {
            ListServiceError::Invalid(msg) => AppError::BadRequest(msg),
            ListServiceError::Duplicate => AppError::Conflict(ITEM_ALREADY_IN_LIST.to_string()),
            ListServiceError::ListNotFound => AppError::NotFound(LIST_NOT_FOUND.to_string()),
            ListServiceError::ItemNotFound => AppError::NotFound(ITEM_NOT_FOUND.to_string()),
            ListServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
