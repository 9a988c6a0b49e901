//! HTTP handlers for question endpoints.

use axum::{
    extract::{Path, Query, State},
    extract::rejection::JsonRejection,
    Json,
};

use crate::api::models::pagination::{paginate, PageQuery};
use crate::api::models::questions::{
    QuestionCreate, QuestionCreateResponse, QuestionDeleteResponse, QuestionListResponse, QuestionSelectionResponse,
    QuestionUpdate, SearchRequest, SingleQuestionResponse,
};
use crate::db::errors::DbError;
use crate::db::models::{NewQuestion, QuestionPatch};
use crate::errors::Error;
use crate::AppState;

/// GET /questions - one id-ordered page of questions, all categories, and the
/// grand question total. An empty page (past the end, or zero questions) is
/// treated as absence.
#[utoipa::path(
    get,
    path = "/questions",
    tag = "questions",
    summary = "List questions",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions", body = QuestionListResponse),
        (status = 404, description = "Requested page is empty"),
    )
)]
#[tracing::instrument(skip_all, fields(page = page.page()))]
pub async fn list_questions(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<QuestionListResponse>, Error> {
    let all = state.store.list_questions().await?;
    let total_questions = all.len() as i64;

    let questions = paginate(&all, page.page());
    if questions.is_empty() {
        return Err(Error::NotFound {
            message: format!("No questions found on page {}", page.page()),
        });
    }

    let categories = state.store.list_categories().await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions,
        current_category: None,
        categories,
        total_questions,
    }))
}

/// GET /questions/{id} - a single formatted question.
#[utoipa::path(
    get,
    path = "/questions/{id}",
    tag = "questions",
    summary = "Get a question",
    params(("id" = i32, Path, description = "Question id")),
    responses(
        (status = 200, description = "The question", body = SingleQuestionResponse),
        (status = 404, description = "No question with this id"),
    )
)]
#[tracing::instrument(skip_all, fields(question_id = id))]
pub async fn get_question(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<SingleQuestionResponse>, Error> {
    let question = state
        .store
        .get_question(id)
        .await?
        .ok_or_else(|| Error::not_found("question", id))?;

    Ok(Json(SingleQuestionResponse { success: true, question }))
}

/// PATCH /questions/{id} - partial update of question and/or answer text.
///
/// A failed write is not an error response: the handler returns HTTP 200 with
/// `success: false` and the record as it would have looked, so callers must
/// inspect the flag rather than the status code.
#[utoipa::path(
    patch,
    path = "/questions/{id}",
    tag = "questions",
    summary = "Update a question",
    params(("id" = i32, Path, description = "Question id")),
    request_body = QuestionUpdate,
    responses(
        (status = 200, description = "Updated question; check the success flag", body = SingleQuestionResponse),
        (status = 400, description = "Malformed request body"),
        (status = 404, description = "No question with this id"),
    )
)]
#[tracing::instrument(skip_all, fields(question_id = id))]
pub async fn update_question(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Result<Json<QuestionUpdate>, JsonRejection>,
) -> Result<Json<SingleQuestionResponse>, Error> {
    let Json(update) = body.map_err(|rejection| Error::BadRequest {
        message: rejection.body_text(),
    })?;

    let existing = state
        .store
        .get_question(id)
        .await?
        .ok_or_else(|| Error::not_found("question", id))?;

    let patch = QuestionPatch::from(update);
    match state.store.update_question(id, &patch).await {
        Ok(question) => Ok(Json(SingleQuestionResponse { success: true, question })),
        Err(DbError::NotFound) => Err(Error::not_found("question", id)),
        Err(err) => {
            tracing::warn!("update of question {id} failed: {err:#}");
            let mut question = existing;
            question.apply(&patch);
            Ok(Json(SingleQuestionResponse { success: false, question }))
        }
    }
}

/// DELETE /questions/{id} - permanently remove a question.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    tag = "questions",
    summary = "Delete a question",
    params(("id" = i32, Path, description = "Question id")),
    responses(
        (status = 200, description = "Deleted; carries the new grand total", body = QuestionDeleteResponse),
        (status = 404, description = "No question with this id"),
    )
)]
#[tracing::instrument(skip_all, fields(question_id = id))]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<QuestionDeleteResponse>, Error> {
    let removed = state.store.delete_question(id).await?;
    if !removed {
        return Err(Error::not_found("question", id));
    }

    let total_questions = state.store.count_questions().await?;

    Ok(Json(QuestionDeleteResponse {
        success: true,
        total_questions,
    }))
}

/// POST /questions - create a question from the body as-is. Absent fields are
/// persisted as NULL; any persistence failure is a terminal 500.
#[utoipa::path(
    post,
    path = "/questions",
    tag = "questions",
    summary = "Create a question",
    request_body = QuestionCreate,
    responses(
        (status = 200, description = "Created; carries the new id and grand total", body = QuestionCreateResponse),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Persistence failure"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_question(
    State(state): State<AppState>,
    body: Result<Json<QuestionCreate>, JsonRejection>,
) -> Result<Json<QuestionCreateResponse>, Error> {
    let Json(create) = body.map_err(|rejection| Error::BadRequest {
        message: rejection.body_text(),
    })?;

    let new = NewQuestion::from(create);
    let question = state
        .store
        .create_question(&new)
        .await
        .map_err(|err| Error::Internal {
            operation: format!("create question: {err}"),
        })?;

    let total_question = state.store.count_questions().await?;

    Ok(Json(QuestionCreateResponse {
        success: true,
        question: question.id,
        total_question,
    }))
}

/// POST /questions/search - case-insensitive substring search on question
/// text. An absent or null `searchTerm` (including a missing body) returns
/// the full set; zero matches is an empty success, never a 404.
#[utoipa::path(
    post,
    path = "/questions/search",
    tag = "questions",
    summary = "Search questions",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching questions with their count", body = QuestionSelectionResponse),
        (status = 400, description = "Malformed request body"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn search_questions(
    State(state): State<AppState>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<QuestionSelectionResponse>, Error> {
    let term = match body {
        Ok(Json(request)) => request.search_term,
        // No JSON body at all behaves like no search term
        Err(JsonRejection::MissingJsonContentType(_)) => None,
        Err(rejection) => {
            return Err(Error::BadRequest {
                message: rejection.body_text(),
            })
        }
    };

    let questions = match term.as_deref() {
        Some(term) => state.store.search_questions(term).await?,
        None => state.store.list_questions().await?,
    };
    let total_questions = questions.len() as i64;

    Ok(Json(QuestionSelectionResponse {
        success: true,
        questions,
        current_category: None,
        total_questions,
    }))
}
