//! OpenAPI document for the service, served at `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::api::handlers;
use crate::api::models;
use crate::db::models::{Category, Question};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia API",
        description = "REST backend for a trivia game: question management, category browsing, and quiz play.",
    ),
    paths(
        handlers::home,
        handlers::questions::list_questions,
        handlers::questions::get_question,
        handlers::questions::create_question,
        handlers::questions::update_question,
        handlers::questions::delete_question,
        handlers::questions::search_questions,
        handlers::categories::list_categories,
        handlers::categories::get_category,
        handlers::categories::questions_by_category,
        handlers::quizzes::play_quiz,
    ),
    components(schemas(
        Question,
        Category,
        models::BannerResponse,
        models::questions::QuestionCreate,
        models::questions::QuestionUpdate,
        models::questions::SearchRequest,
        models::questions::QuestionListResponse,
        models::questions::SingleQuestionResponse,
        models::questions::QuestionCreateResponse,
        models::questions::QuestionDeleteResponse,
        models::questions::QuestionSelectionResponse,
        models::categories::CategoryListResponse,
        models::categories::SingleCategoryResponse,
        models::quizzes::QuizRequest,
        models::quizzes::QuizCategory,
        models::quizzes::QuizDraw,
        models::quizzes::QuizResponse,
    )),
    tags(
        (name = "meta", description = "Service metadata"),
        (name = "questions", description = "Question management and search"),
        (name = "categories", description = "Category catalogue"),
        (name = "quizzes", description = "Quiz play"),
    )
)]
pub struct ApiDoc;
