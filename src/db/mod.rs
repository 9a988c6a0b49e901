//! Store layer for trivia data.
//!
//! The [`TriviaStore`] trait is the persistence seam: handlers receive an
//! explicit store handle through [`crate::AppState`] instead of reaching for a
//! process-wide persistence context. Two implementations are provided:
//!
//! - [`PgStore`]: PostgreSQL via sqlx, the production store
//! - [`MemoryStore`]: in-process maps, used by the test suite and for
//!   database-free demo runs

pub mod errors;
pub mod memory;
pub mod models;
pub mod postgres;

pub use errors::{DbError, Result};
pub use memory::MemoryStore;
pub use models::{Category, NewQuestion, Question, QuestionPatch};
pub use postgres::PgStore;

/// Data access operations backing the route handlers.
///
/// List-style operations return full id-ordered result sets; windowing into
/// pages happens in the API layer. Random selection for quiz play is likewise
/// not a store concern: [`TriviaStore::quiz_candidates`] returns every
/// eligible question and the caller draws one uniformly.
#[async_trait::async_trait]
pub trait TriviaStore: Send + Sync {
    /// All questions, ordered by id ascending.
    async fn list_questions(&self) -> Result<Vec<Question>>;

    /// A single question by id, `None` when absent.
    async fn get_question(&self, id: i32) -> Result<Option<Question>>;

    /// Insert a question, assigning the next id. Absent fields persist as NULL.
    async fn create_question(&self, new: &NewQuestion) -> Result<Question>;

    /// Partially update a question's text fields.
    ///
    /// # Errors
    /// - `DbError::NotFound` when no question has the given id
    async fn update_question(&self, id: i32, patch: &QuestionPatch) -> Result<Question>;

    /// Delete a question. Returns whether a row was removed.
    async fn delete_question(&self, id: i32) -> Result<bool>;

    /// Total number of questions across all categories.
    async fn count_questions(&self) -> Result<i64>;

    /// Questions whose text contains `term`, case-insensitively.
    /// Matches question text only, never answer text.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>>;

    /// Questions whose category reference equals the given category id,
    /// ordered by id ascending.
    async fn questions_in_category(&self, category_id: i32) -> Result<Vec<Question>>;

    /// Questions eligible for a quiz draw: not in `exclude` and, when
    /// `category_id` is given, matching that category.
    async fn quiz_candidates(&self, category_id: Option<i32>, exclude: &[i32]) -> Result<Vec<Question>>;

    /// All categories, ordered by id ascending.
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// A single category by id, `None` when absent.
    async fn get_category(&self, id: i32) -> Result<Option<Category>>;
}
