//! Entity models for the trivia store.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A trivia question as stored and as formatted on the wire.
///
/// The category reference is free-form text, not a foreign key into
/// `categories` - a question may name a category id that does not exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Question {
    pub id: i32,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<i32>,
}

/// A question category. Read-only through the API, seeded by migration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Fields for inserting a question. All optional: absent fields persist as NULL.
#[derive(Debug, Clone, Default)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<i32>,
}

/// Partial update of a question. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct QuestionPatch {
    pub question: Option<String>,
    pub answer: Option<String>,
}

impl Question {
    /// Apply a patch in memory without touching storage.
    pub fn apply(&mut self, patch: &QuestionPatch) {
        if let Some(text) = &patch.question {
            self.question = Some(text.clone());
        }
        if let Some(text) = &patch.answer {
            self.answer = Some(text.clone());
        }
    }
}
