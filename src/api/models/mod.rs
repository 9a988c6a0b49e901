//! Request/response data structures for API communication.

pub mod categories;
pub mod pagination;
pub mod questions;
pub mod quizzes;

use serde::Serialize;
use utoipa::ToSchema;

/// Response for the `GET /` service banner.
#[derive(Debug, Serialize, ToSchema)]
pub struct BannerResponse {
    pub success: bool,
    pub message: String,
    pub routes: Vec<String>,
}
