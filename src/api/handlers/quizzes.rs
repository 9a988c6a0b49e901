//! HTTP handler for quiz play.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use rand::seq::SliceRandom;

use crate::api::models::quizzes::{QuizDraw, QuizRequest, QuizResponse};
use crate::errors::Error;
use crate::AppState;

/// POST /quizzes - draw one question uniformly at random from those not yet
/// asked, optionally restricted to a category. Once every eligible question
/// has been asked the `question` field is the literal `false`.
#[utoipa::path(
    post,
    path = "/quizzes",
    tag = "quizzes",
    summary = "Draw the next quiz question",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "A fresh question, or `false` when exhausted", body = QuizResponse),
        (status = 422, description = "Missing or malformed request body"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn play_quiz(
    State(state): State<AppState>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, Error> {
    let Json(request) = body.map_err(|rejection| Error::Unprocessable {
        message: rejection.body_text(),
    })?;

    let candidates = state
        .store
        .quiz_candidates(request.category_filter(), &request.previous_questions)
        .await?;

    let question = match candidates.choose(&mut rand::thread_rng()).cloned() {
        Some(question) => QuizDraw::Question(question),
        None => QuizDraw::Exhausted(false),
    };

    Ok(Json(QuizResponse { success: true, question }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};
    use std::collections::HashSet;

    use crate::test_utils::{create_test_app, seed_question, seed_questions};

    #[test_log::test(tokio::test)]
    async fn test_quiz_never_repeats_previous_questions() {
        let (server, store) = create_test_app();
        seed_questions(&store, 5).await;

        let mut previous: Vec<i64> = vec![];
        for _ in 0..5 {
            let response = server
                .post("/quizzes")
                .json(&json!({"previous_questions": previous, "quiz_category": {"id": 0, "type": "click"}}))
                .await;
            response.assert_status_ok();

            let body: Value = response.json();
            assert_eq!(body["success"], true);
            let id = body["question"]["id"].as_i64().unwrap();
            assert!(!previous.contains(&id));
            previous.push(id);
        }

        let drawn: HashSet<i64> = previous.iter().copied().collect();
        assert_eq!(drawn.len(), 5);
    }

    #[test_log::test(tokio::test)]
    async fn test_quiz_exhaustion_returns_literal_false() {
        let (server, store) = create_test_app();
        seed_questions(&store, 2).await;

        let response = server
            .post("/quizzes")
            .json(&json!({"previous_questions": [1, 2]}))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["question"], Value::Bool(false));
    }

    #[test_log::test(tokio::test)]
    async fn test_quiz_respects_category_filter() {
        let (server, store) = create_test_app();
        seed_question(&store, "What is H2O?", "Water", "1", 1).await;
        seed_question(&store, "Who painted the Mona Lisa?", "Da Vinci", "2", 2).await;

        for _ in 0..10 {
            let response = server
                .post("/quizzes")
                .json(&json!({"previous_questions": [], "quiz_category": {"id": 2, "type": "Art"}}))
                .await;
            response.assert_status_ok();
            let body: Value = response.json();
            assert_eq!(body["question"]["category"], "2");
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_quiz_without_body_is_unprocessable() {
        let (server, store) = create_test_app();
        seed_questions(&store, 2).await;

        let response = server.post("/quizzes").await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 422);
    }

    #[test_log::test(tokio::test)]
    async fn test_quiz_with_empty_body_draws_from_all() {
        let (server, store) = create_test_app();
        seed_questions(&store, 3).await;

        let response = server.post("/quizzes").json(&json!({})).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert!(body["question"]["id"].is_i64());
    }
}
