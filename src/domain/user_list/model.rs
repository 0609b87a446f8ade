use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::num::IntErrorKind;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserList {
    pub user_id: String,
    pub content_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserList {
    pub fn contains(&self, content_id: &str) -> bool {
        self.content_ids.iter().any(|id| id == content_id)
    }
}

/// Requested page window. Both fields are always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Build from raw query values. Anything that is not a positive integer
    /// falls back to the default for that field.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(DEFAULT_PAGE),
            limit: parse_positive(limit).unwrap_or(DEFAULT_LIMIT),
        }
    }

    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// Positive integers only. Values past `u64::MAX` saturate.
fn parse_positive(raw: Option<&str>) -> Option<u64> {
    let parsed = match raw?.trim().parse::<u64>() {
        Ok(value) => value,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u64::MAX,
        Err(_) => return None,
    };
    Some(parsed).filter(|v| *v > 0)
}

/// One page of a user's list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPage {
    pub items: Vec<String>,
    pub total_items: u64,
    pub current_page: u64,
    pub total_pages: u64,
}

impl ListPage {
    pub fn empty(request: PageRequest) -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            current_page: request.page,
            total_pages: 0,
        }
    }

    /// Slice `content_ids` by `request`. A window past the end yields no
    /// items rather than an error.
    pub fn slice(content_ids: &[String], request: PageRequest) -> Self {
        let total_items = content_ids.len() as u64;
        let start = usize::try_from(request.skip())
            .unwrap_or(usize::MAX)
            .min(content_ids.len());
        let take = usize::try_from(request.limit).unwrap_or(usize::MAX);

        Self {
            items: content_ids[start..].iter().take(take).cloned().collect(),
            total_items,
            current_page: request.page,
            total_pages: total_items.div_ceil(request.limit),
        }
    }

    pub fn is_empty_list(&self) -> bool {
        self.total_items == 0
    }
}
