use serde::{Deserialize, Serialize};

use super::query::QueryParams;

/// Page size and cursor for list endpoints.
///
/// Both are optional; leaving them out asks the service for its default
/// page size starting at the first page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParams {
    /// Maximum number of entries to return.
    pub limit: Option<u32>,
    /// Opaque cursor taken from a previous [`Page`].
    pub cursor: Option<String>,
}

impl PageParams {
    /// First page with the service's default size.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

impl From<&PageParams> for QueryParams {
    fn from(params: &PageParams) -> Self {
        QueryParams::new()
            .push("limit", params.limit)
            .push("cursor", params.cursor.as_deref())
    }
}

/// One page of a list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Entries on this page.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Cursor for the following page, `None` on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Parameters requesting the page after this one, keeping `limit`.
    ///
    /// The cursor is replayed verbatim.
    pub fn next_page(&self, current: &PageParams) -> Option<PageParams> {
        self.cursor.as_ref().map(|cursor| PageParams {
            limit: current.limit,
            cursor: Some(cursor.clone()),
        })
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
