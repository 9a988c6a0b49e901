//! Request/response data structures for question endpoints.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::db::models::{Category, NewQuestion, Question, QuestionPatch};

/// Body for `POST /questions`.
///
/// Every field is optional: absent fields persist as NULL. The quiz client
/// submits `category` and `difficulty` as strings, so both scalars accept a
/// number or a numeric string.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct QuestionCreate {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    #[schema(value_type = Option<String>)]
    pub category: Option<String>,
    #[serde(deserialize_with = "int_or_numeric_string")]
    #[schema(value_type = Option<i32>)]
    pub difficulty: Option<i32>,
}

impl From<QuestionCreate> for NewQuestion {
    fn from(create: QuestionCreate) -> Self {
        Self {
            question: create.question,
            answer: create.answer,
            category: create.category,
            difficulty: create.difficulty,
        }
    }
}

/// Body for `PATCH /questions/{id}`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct QuestionUpdate {
    pub question: Option<String>,
    pub answer: Option<String>,
}

impl From<QuestionUpdate> for QuestionPatch {
    fn from(update: QuestionUpdate) -> Self {
        Self {
            question: update.question,
            answer: update.answer,
        }
    }
}

/// Body for `POST /questions/search`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Response for `GET /questions`: one page of questions plus the full
/// category list and the grand question total.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub current_category: Option<String>,
    pub categories: Vec<Category>,
    pub total_questions: i64,
}

/// Response carrying a single formatted question. Used by the single-get and
/// by the partial update, where `success` may be false on a failed write.
#[derive(Debug, Serialize, ToSchema)]
pub struct SingleQuestionResponse {
    pub success: bool,
    pub question: Question,
}

/// Response for `POST /questions`: the assigned id and the new grand total.
/// The `total_question` key is singular; it is part of the client contract.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionCreateResponse {
    pub success: bool,
    pub question: i32,
    pub total_question: i64,
}

/// Response for `DELETE /questions/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionDeleteResponse {
    pub success: bool,
    pub total_questions: i64,
}

/// Response for search and category-filtered listings: an unpaginated (search)
/// or paginated (by-category) question set with its surrounding totals.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionSelectionResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub current_category: Option<String>,
    pub total_questions: i64,
}

/// Accept a JSON string or number, storing it as text.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Value {
        Text(String),
        Number(i64),
    }

    Ok(Option::<Value>::deserialize(deserializer)?.map(|value| match value {
        Value::Text(text) => text,
        Value::Number(number) => number.to_string(),
    }))
}

/// Accept a JSON integer or a numeric string.
fn int_or_numeric_string<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Value {
        Number(i32),
        Text(String),
    }

    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Value::Number(number)) => Ok(Some(number)),
        Some(Value::Text(text)) => text
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid integer: {text:?}"))),
    }
}
