//! Query-string and request body types for the API.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// `?page=&page_size=` with forgiving defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

impl PageQuery {
    /// One-based; zero and absent both mean the first page.
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Clamped to `1..=MAX_PAGE_SIZE`.
    pub fn page_size(&self) -> u64 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }
}

/// Blog listing filters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostListQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    /// Category slug.
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InboxQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub is_read: Option<bool>,
}

// Query strings cannot use `#[serde(flatten)]` with numbers, so each
// listing query carries its own paging fields.
macro_rules! paging {
    ($($query:ty),+) => {
        $(impl $query {
            pub fn paging(&self) -> PageQuery {
                PageQuery {
                    page: self.page,
                    page_size: self.page_size,
                }
            }
        })+
    };
}

paging!(PostListQuery, SearchQuery, InboxQuery);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentQuery {
    #[serde(default)]
    pub approved_only: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminNotesRequest {
    pub notes: Option<String>,
}

/// Target for a raw-body upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadQuery {
    pub file_name: String,
    #[serde(default = "default_upload_folder")]
    pub folder: String,
}

fn default_upload_folder() -> String {
    "images".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub path: String,
    pub size: u64,
}
