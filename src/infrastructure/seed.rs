use crate::domain::user_list::{UserList, UserListRepository};
use crate::error::AppResult;

/// Demo catalog ids written by the seed binary
pub const SEED_CONTENT_IDS: [&str; 12] = [
    "movie_abc_1",
    "tvshow_xyz_1",
    "movie_def_2",
    "tvshow_pqr_2",
    "movie_ghi_3",
    "tvshow_uvw_3",
    "movie_jkl_4",
    "tvshow_mno_4",
    "movie_stu_5",
    "tvshow_fgh_5",
    "movie_ijk_6",
    "tvshow_lmn_6",
];

/// Wipe every list and store the demo list for `user_id`
pub async fn seed_user_list(
    repository: &dyn UserListRepository,
    user_id: &str,
) -> AppResult<UserList> {
    let removed = repository.delete_all().await?;
    tracing::info!(removed, "Existing user lists cleared");

    let content_ids: Vec<String> = SEED_CONTENT_IDS.iter().map(|id| id.to_string()).collect();
    let list = repository.replace(user_id, &content_ids).await?;
    tracing::info!(user_id, items = list.content_ids.len(), "Seeded user list");

    Ok(list)
}
