use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

use crate::domain::user_list::dto::{ITEM_ADDED, ITEM_ADDED_TO_NEW_LIST, ITEM_REMOVED};
use crate::domain::user_list::{
    AddItemRequest, AddOutcome, ListItemsQuery, ListItemsResponse, PageRequest,
    UserListResponse,
};
use crate::{
    domain::user_list::{ListServiceApi, ListServiceError},
    error::AppResult,
    infrastructure::auth::CurrentUser,
};

pub struct UserListController {
    list_service: Arc<dyn ListServiceApi>,
}

impl UserListController {
    pub fn new(list_service: Arc<dyn ListServiceApi>) -> Self {
        Self { list_service }
    }

    /// POST /api/my-list/add - Add an item to the current user's list
    pub async fn add_item(
        State(controller): State<Arc<UserListController>>,
        Extension(user): Extension<CurrentUser>,
        payload: Result<Json<AddItemRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, Json<UserListResponse>)> {
        // An unreadable body carries no content id either.
        let content_id = payload
            .ok()
            .and_then(|Json(request)| request.content_id)
            .unwrap_or_default();

        let outcome = controller
            .list_service
            .add_item(&user.user_id, &content_id)
            .await?;

        let (status, message) = match outcome {
            AddOutcome::Created(_) => (StatusCode::CREATED, ITEM_ADDED_TO_NEW_LIST),
            AddOutcome::Updated(_) => (StatusCode::OK, ITEM_ADDED),
        };
        Ok((
            status,
            Json(UserListResponse::new(message, outcome.into_user_list())),
        ))
    }

    /// DELETE /api/my-list/remove/:contentId - Remove an item from the list
    pub async fn remove_item(
        State(controller): State<Arc<UserListController>>,
        Extension(user): Extension<CurrentUser>,
        Path(content_id): Path<String>,
    ) -> AppResult<Json<UserListResponse>> {
        let list = controller
            .list_service
            .remove_item(&user.user_id, &content_id)
            .await?;
        Ok(Json(UserListResponse::new(ITEM_REMOVED, list)))
    }

    /// DELETE /api/my-list/remove - Path parameter missing
    pub async fn remove_item_without_id() -> AppResult<Json<UserListResponse>> {
        Err(ListServiceError::missing_path_content_id().into())
    }

    /// GET /api/my-list - Paginated list of content ids
    pub async fn list_items(
        State(controller): State<Arc<UserListController>>,
        Extension(user): Extension<CurrentUser>,
        query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    ) -> AppResult<Json<ListItemsResponse>> {
        let query = query
            .map(|Query(pairs)| ListItemsQuery::from_pairs(pairs))
            .unwrap_or_default();
        let page = PageRequest::from_raw(query.page.as_deref(), query.limit.as_deref());

        let result = controller
            .list_service
            .list_items(&user.user_id, page)
            .await?;
        Ok(Json(ListItemsResponse::from(result)))
    }
}
