//! Request/response data structures for category endpoints.

use serde::Serialize;
use utoipa::ToSchema;

use crate::db::models::Category;

/// Response for `GET /categories`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: Vec<Category>,
}

/// Response for `GET /categories/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SingleCategoryResponse {
    pub success: bool,
    pub category: Category,
}
