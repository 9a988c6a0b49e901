//! Shared helpers for route-level tests: an in-memory-backed test server and
//! seeding shortcuts.

use std::sync::Arc;

use axum_test::TestServer;

use crate::config::Config;
use crate::db::{MemoryStore, NewQuestion, Question, TriviaStore};
use crate::{build_router, AppState};

/// A test server over an arbitrary store implementation.
pub fn create_test_app_with(store: Arc<dyn TriviaStore>) -> TestServer {
    let state = AppState {
        store,
        config: Config::default(),
    };
    let router = build_router(state).expect("router should build");
    TestServer::new(router).expect("test server should start")
}

fn server_with(store: MemoryStore) -> TestServer {
    create_test_app_with(Arc::new(store))
}

/// A test server backed by a fresh in-memory store with the seeded category
/// catalogue and no questions.
pub fn create_test_app() -> (TestServer, MemoryStore) {
    let store = MemoryStore::new();
    (server_with(store.clone()), store)
}

/// A test server with no categories at all.
pub fn create_empty_test_app() -> (TestServer, MemoryStore) {
    let store = MemoryStore::empty();
    (server_with(store.clone()), store)
}

/// Insert one question directly into the store.
pub async fn seed_question(store: &MemoryStore, question: &str, answer: &str, category: &str, difficulty: i32) -> Question {
    use crate::db::TriviaStore;

    store
        .create_question(&NewQuestion {
            question: Some(question.to_string()),
            answer: Some(answer.to_string()),
            category: Some(category.to_string()),
            difficulty: Some(difficulty),
        })
        .await
        .expect("seeding should succeed")
}

/// Insert `count` questions cycling through the six seeded categories.
pub async fn seed_questions(store: &MemoryStore, count: usize) -> Vec<Question> {
    let mut seeded = Vec::with_capacity(count);
    for i in 1..=count {
        let category = (i % 6) + 1;
        seeded.push(
            seed_question(
                store,
                &format!("Sample question number {i}?"),
                &format!("Answer {i}"),
                &category.to_string(),
                ((i % 5) + 1) as i32,
            )
            .await,
        );
    }
    seeded
}
