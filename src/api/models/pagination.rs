//! Shared pagination types for API query parameters.
//!
//! Question listings use 1-based page numbers with a fixed page size of 10.
//! Pagination windows an already-fetched, already-ordered list; out-of-range
//! pages yield an empty window, which the handlers map to "not found".

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Fixed number of questions per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Standard page-number query parameter for paginated question listings.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number (default: 1)
    #[param(default = 1, minimum = 1)]
    pub page: Option<u32>,
}

impl PageQuery {
    /// Get the requested page, defaulting to 1 if not specified.
    #[inline]
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }
}

/// Window `items` to the given 1-based page of [`QUESTIONS_PER_PAGE`] items.
///
/// Pages past the end (and page 0) produce an empty vector, not an error.
pub fn paginate<T: Clone>(items: &[T], page: u32) -> Vec<T> {
    if page == 0 {
        return Vec::new();
    }
    let start = (page as usize - 1) * QUESTIONS_PER_PAGE;
    items.iter().skip(start).take(QUESTIONS_PER_PAGE).cloned().collect()
}
