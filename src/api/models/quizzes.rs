//! Request/response data structures for quiz play.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::models::Question;

/// Body for `POST /quizzes`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct QuizRequest {
    /// Ids of questions already asked in this quiz round.
    pub previous_questions: Vec<i32>,
    /// Category selector; id 0 or an absent selector means "any category".
    pub quiz_category: Option<QuizCategory>,
}

/// Category selector sent by the quiz client. The client echoes the whole
/// category object; only the id matters here.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuizCategory {
    pub id: i32,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl QuizRequest {
    /// The effective category filter: `None` for "any category".
    pub fn category_filter(&self) -> Option<i32> {
        self.quiz_category.as_ref().map(|c| c.id).filter(|id| *id != 0)
    }
}

/// The drawn question, or the literal `false` once no eligible question
/// remains. The client distinguishes the two by type, not by null.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum QuizDraw {
    Question(Question),
    Exhausted(bool),
}

/// Response for `POST /quizzes`.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    pub question: QuizDraw,
}
