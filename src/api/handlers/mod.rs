//! HTTP request handlers, grouped by resource.

pub mod categories;
pub mod questions;
pub mod quizzes;

use axum::Json;

use crate::api::models::BannerResponse;

/// GET / - service banner listing the top-level resource routes.
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    summary = "Service banner",
    responses((status = 200, description = "Service banner", body = BannerResponse))
)]
pub async fn home() -> Json<BannerResponse> {
    Json(BannerResponse {
        success: true,
        message: "Welcome to Trivia API".to_string(),
        routes: vec![
            "questions".to_string(),
            "categories".to_string(),
            "quizzes".to_string(),
        ],
    })
}
