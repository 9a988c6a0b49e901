//! HTTP handlers for category endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::api::models::categories::{CategoryListResponse, SingleCategoryResponse};
use crate::api::models::pagination::{paginate, PageQuery};
use crate::api::models::questions::QuestionSelectionResponse;
use crate::errors::Error;
use crate::AppState;

/// GET /categories - every category. An empty catalogue is treated as
/// absence rather than an empty success.
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    summary = "List categories",
    responses(
        (status = 200, description = "All categories", body = CategoryListResponse),
        (status = 404, description = "No categories exist"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<CategoryListResponse>, Error> {
    let categories = state.store.list_categories().await?;
    if categories.is_empty() {
        return Err(Error::NotFound {
            message: "No categories found".to_string(),
        });
    }

    Ok(Json(CategoryListResponse {
        success: true,
        categories,
    }))
}

/// GET /categories/{id} - a single category.
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "categories",
    summary = "Get a category",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "The category", body = SingleCategoryResponse),
        (status = 404, description = "No category with this id"),
    )
)]
#[tracing::instrument(skip_all, fields(category_id = id))]
pub async fn get_category(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<SingleCategoryResponse>, Error> {
    let category = state
        .store
        .get_category(id)
        .await?
        .ok_or_else(|| Error::not_found("category", id))?;

    Ok(Json(SingleCategoryResponse { success: true, category }))
}

/// GET /categories/{id}/questions - one page of the category's questions.
///
/// `total_questions` is the grand total across all categories, not the
/// filtered count; clients rely on this to keep their overall pager stable
/// while browsing a category.
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    tag = "categories",
    summary = "List questions in a category",
    params(("id" = i32, Path, description = "Category id"), PageQuery),
    responses(
        (status = 200, description = "One page of the category's questions", body = QuestionSelectionResponse),
        (status = 404, description = "Unknown category or empty page"),
    )
)]
#[tracing::instrument(skip_all, fields(category_id = id, page = page.page()))]
pub async fn questions_by_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(page): Query<PageQuery>,
) -> Result<Json<QuestionSelectionResponse>, Error> {
    let category = state
        .store
        .get_category(id)
        .await?
        .ok_or_else(|| Error::not_found("category", id))?;

    let in_category = state.store.questions_in_category(id).await?;
    let questions = paginate(&in_category, page.page());
    if questions.is_empty() {
        return Err(Error::NotFound {
            message: format!("No questions found for category {id} on page {}", page.page()),
        });
    }

    let total_questions = state.store.count_questions().await?;

    Ok(Json(QuestionSelectionResponse {
        success: true,
        questions,
        current_category: Some(category.kind),
        total_questions,
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::Value;

    use crate::test_utils::{create_empty_test_app, create_test_app, seed_question, seed_questions};

    #[test_log::test(tokio::test)]
    async fn test_list_categories_returns_catalogue() {
        let (server, _store) = create_test_app();

        let response = server.get("/categories").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        let categories = body["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0]["id"], 1);
        assert_eq!(categories[0]["type"], "Science");
        assert_eq!(categories[5]["type"], "Sports");
    }

    #[test_log::test(tokio::test)]
    async fn test_list_categories_empty_is_not_found() {
        let (server, _store) = create_empty_test_app();
        server.get("/categories").await.assert_status(StatusCode::NOT_FOUND);
    }

    #[test_log::test(tokio::test)]
    async fn test_get_category() {
        let (server, _store) = create_test_app();

        let response = server.get("/categories/3").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["category"]["id"], 3);
        assert_eq!(body["category"]["type"], "Geography");

        server.get("/categories/99").await.assert_status(StatusCode::NOT_FOUND);
    }

    #[test_log::test(tokio::test)]
    async fn test_questions_by_category_filters_and_reports_grand_total() {
        let (server, store) = create_test_app();
        seed_question(&store, "What is H2O?", "Water", "1", 1).await;
        seed_question(&store, "Who painted the Mona Lisa?", "Da Vinci", "2", 2).await;
        seed_question(&store, "What is the boiling point of water?", "100C", "1", 1).await;

        let response = server.get("/categories/1/questions").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["current_category"], "Science");
        // Grand total, not the filtered count
        assert_eq!(body["total_questions"], 3);
        // Unlike the full listing, no category catalogue rides along
        assert!(body.get("categories").is_none());

        let questions = body["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 2);
        assert!(questions.iter().all(|q| q["category"] == "1"));
    }

    #[test_log::test(tokio::test)]
    async fn test_questions_by_category_unknown_category_is_not_found() {
        let (server, store) = create_test_app();
        seed_questions(&store, 3).await;
        server.get("/categories/99/questions").await.assert_status(StatusCode::NOT_FOUND);
    }

    #[test_log::test(tokio::test)]
    async fn test_questions_by_category_empty_page_is_not_found() {
        let (server, store) = create_test_app();
        seed_question(&store, "What is H2O?", "Water", "1", 1).await;

        // Category exists but holds no questions
        server.get("/categories/2/questions").await.assert_status(StatusCode::NOT_FOUND);

        // Page past the end of a non-empty category
        server
            .get("/categories/1/questions")
            .add_query_param("page", 2)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
