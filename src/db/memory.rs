//! In-memory store implementation.
//!
//! Stores questions and categories in ordered maps behind a lock. Suitable for
//! tests and single-process demo runs; data is lost on restart. Ids are
//! assigned from a monotonic counter to match the SERIAL behavior of the
//! Postgres store.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::errors::{DbError, Result};
use super::models::{Category, NewQuestion, Question, QuestionPatch};
use super::TriviaStore;

struct Inner {
    questions: BTreeMap<i32, Question>,
    categories: BTreeMap<i32, Category>,
    next_question_id: i32,
}

/// In-memory implementation of [`TriviaStore`].
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

/// Category seed matching the `categories` seed migration.
const SEED_CATEGORIES: [&str; 6] = ["Science", "Art", "Geography", "History", "Entertainment", "Sports"];

impl MemoryStore {
    /// Create a store pre-seeded with the standard six categories, mirroring
    /// the migrated Postgres schema.
    pub fn new() -> Self {
        let categories = SEED_CATEGORIES
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let id = i as i32 + 1;
                (id, Category { id, kind: (*kind).to_string() })
            })
            .collect();

        Self {
            inner: Arc::new(RwLock::new(Inner {
                questions: BTreeMap::new(),
                categories,
                next_question_id: 1,
            })),
        }
    }

    /// Create a completely empty store (no categories).
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                questions: BTreeMap::new(),
                categories: BTreeMap::new(),
                next_question_id: 1,
            })),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TriviaStore for MemoryStore {
    async fn list_questions(&self) -> Result<Vec<Question>> {
        let inner = self.inner.read();
        Ok(inner.questions.values().cloned().collect())
    }

    async fn get_question(&self, id: i32) -> Result<Option<Question>> {
        let inner = self.inner.read();
        Ok(inner.questions.get(&id).cloned())
    }

    async fn create_question(&self, new: &NewQuestion) -> Result<Question> {
        let mut inner = self.inner.write();
        let id = inner.next_question_id;
        inner.next_question_id += 1;

        let question = Question {
            id,
            question: new.question.clone(),
            answer: new.answer.clone(),
            category: new.category.clone(),
            difficulty: new.difficulty,
        };
        inner.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn update_question(&self, id: i32, patch: &QuestionPatch) -> Result<Question> {
        let mut inner = self.inner.write();
        let question = inner.questions.get_mut(&id).ok_or(DbError::NotFound)?;
        question.apply(patch);
        Ok(question.clone())
    }

    async fn delete_question(&self, id: i32) -> Result<bool> {
        let mut inner = self.inner.write();
        Ok(inner.questions.remove(&id).is_some())
    }

    async fn count_questions(&self) -> Result<i64> {
        let inner = self.inner.read();
        Ok(inner.questions.len() as i64)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let needle = term.to_lowercase();
        let inner = self.inner.read();
        Ok(inner
            .questions
            .values()
            .filter(|q| {
                q.question
                    .as_deref()
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }

    async fn questions_in_category(&self, category_id: i32) -> Result<Vec<Question>> {
        let reference = category_id.to_string();
        let inner = self.inner.read();
        Ok(inner
            .questions
            .values()
            .filter(|q| q.category.as_deref() == Some(reference.as_str()))
            .cloned()
            .collect())
    }

    async fn quiz_candidates(&self, category_id: Option<i32>, exclude: &[i32]) -> Result<Vec<Question>> {
        let reference = category_id.map(|id| id.to_string());
        let inner = self.inner.read();
        Ok(inner
            .questions
            .values()
            .filter(|q| !exclude.contains(&q.id))
            .filter(|q| match &reference {
                Some(reference) => q.category.as_deref() == Some(reference.as_str()),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let inner = self.inner.read();
        Ok(inner.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>> {
        let inner = self.inner.read();
        Ok(inner.categories.get(&id).cloned())
    }
}
