//! PostgreSQL store implementation.
//!
//! Queries use the runtime-bound sqlx API so the crate builds without a live
//! database. Pagination and random selection are deliberately not pushed into
//! SQL: list operations return full id-ordered sets and the API layer windows
//! or draws from them.

use sqlx::PgPool;
use tracing::instrument;

use super::errors::{DbError, Result};
use super::models::{Category, NewQuestion, Question, QuestionPatch};
use super::TriviaStore;

/// PostgreSQL implementation of [`TriviaStore`].
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl TriviaStore for PgStore {
    #[instrument(skip(self), err)]
    async fn list_questions(&self) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    #[instrument(skip(self), err)]
    async fn get_question(&self, id: i32) -> Result<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(question)
    }

    #[instrument(skip(self, new), err)]
    async fn create_question(&self, new: &NewQuestion) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(&new.category)
        .bind(new.difficulty)
        .fetch_one(&self.pool)
        .await?;
        Ok(question)
    }

    #[instrument(skip(self, patch), fields(question_id = id), err)]
    async fn update_question(&self, id: i32, patch: &QuestionPatch) -> Result<Question> {
        // Conditional field update: NULL binds leave the column unchanged
        let question = sqlx::query_as::<_, Question>(
            r#"
            UPDATE questions SET
                question = COALESCE($2, question),
                answer = COALESCE($3, answer)
            WHERE id = $1
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(id)
        .bind(&patch.question)
        .bind(&patch.answer)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DbError::NotFound)?;
        Ok(question)
    }

    #[instrument(skip(self), fields(question_id = id), err)]
    async fn delete_question(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), err)]
    async fn count_questions(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    #[instrument(skip(self, term), err)]
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let pattern = format!("%{term}%");
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE question ILIKE $1 ORDER BY id",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    #[instrument(skip(self), err)]
    async fn questions_in_category(&self, category_id: i32) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE category = $1 ORDER BY id",
        )
        .bind(category_id.to_string())
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    #[instrument(skip(self, exclude), fields(excluded = exclude.len()), err)]
    async fn quiz_candidates(&self, category_id: Option<i32>, exclude: &[i32]) -> Result<Vec<Question>> {
        let questions = match category_id {
            Some(category_id) => {
                sqlx::query_as::<_, Question>(
                    r#"
                    SELECT id, question, answer, category, difficulty FROM questions
                    WHERE category = $1 AND NOT (id = ANY($2))
                    ORDER BY id
                    "#,
                )
                .bind(category_id.to_string())
                .bind(exclude)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Question>(
                    r#"
                    SELECT id, question, answer, category, difficulty FROM questions
                    WHERE NOT (id = ANY($1))
                    ORDER BY id
                    "#,
                )
                .bind(exclude)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(questions)
    }

    #[instrument(skip(self), err)]
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(categories)
    }

    #[instrument(skip(self), err)]
    async fn get_category(&self, id: i32) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(category)
    }
}
