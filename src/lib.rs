//! REST backend for a trivia game.
//!
//! The service exposes question management, a category catalogue, full-text
//! question search, and quiz play over HTTP with JSON bodies. Persistence is
//! behind the [`db::TriviaStore`] trait so handlers are testable against an
//! in-memory store and run against Postgres in production.

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod openapi;
pub mod telemetry;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use sqlx::PgPool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::api::handlers;
use crate::config::{Config, CorsOrigin};
use crate::db::{PgStore, TriviaStore};
use crate::errors::Error;
use crate::openapi::ApiDoc;

/// Shared state available to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TriviaStore>,
    pub config: Config,
}

/// Embedded database migrations.
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PATCH,
        Method::DELETE,
        Method::OPTIONS,
    ];
    let headers = [header::CONTENT_TYPE, header::AUTHORIZATION];

    let wildcard = config
        .cors
        .allowed_origins
        .iter()
        .any(|origin| matches!(origin, CorsOrigin::Wildcard));

    // Credentials cannot be combined with a wildcard origin
    let layer = if wildcard {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(headers)
    } else {
        let origins = config
            .cors
            .allowed_origins
            .iter()
            .map(|origin| HeaderValue::from_str(&origin.as_str()))
            .collect::<Result<Vec<_>, _>>()
            .context("invalid CORS origin")?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_credentials(true)
    };

    Ok(layer)
}

/// Build the service router with all routes, fallbacks, and middleware.
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let cors = create_cors_layer(&state.config)?;

    let router = Router::new()
        .route("/", get(handlers::home))
        .route(
            "/questions",
            get(handlers::questions::list_questions).post(handlers::questions::create_question),
        )
        .route(
            "/questions/{id}",
            get(handlers::questions::get_question)
                .delete(handlers::questions::delete_question)
                .patch(handlers::questions::update_question),
        )
        .route("/questions/search", post(handlers::questions::search_questions))
        .route("/categories", get(handlers::categories::list_categories))
        .route("/categories/{id}", get(handlers::categories::get_category))
        .route(
            "/categories/{id}/questions",
            get(handlers::categories::questions_by_category),
        )
        .route("/quizzes", post(handlers::quizzes::play_quiz))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .method_not_allowed_fallback(|| async { Error::MethodNotAllowed })
        .fallback(|| async {
            Error::NotFound {
                message: "Route not found".to_string(),
            }
        })
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state);

    Ok(router)
}

/// The running service: a configured router bound to a Postgres pool.
pub struct Application {
    router: Router,
    config: Config,
    pool: PgPool,
}

impl Application {
    /// Connect to the database, run migrations, and assemble the router.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let connection_string = config.database.connection_string();
        let pool = PgPool::connect(&connection_string)
            .await
            .context("failed to connect to database")?;

        migrator().run(&pool).await.context("failed to run migrations")?;

        let state = AppState {
            store: Arc::new(PgStore::new(pool.clone())),
            config: config.clone(),
        };
        let router = build_router(state)?;

        Ok(Application { router, config, pool })
    }

    /// Serve until the shutdown future resolves, then close the pool.
    pub async fn serve(self, shutdown: impl std::future::Future<Output = ()> + Send + 'static) -> anyhow::Result<()> {
        let address = self.config.bind_address();
        let listener = tokio::net::TcpListener::bind(&address)
            .await
            .with_context(|| format!("failed to bind {address}"))?;
        tracing::info!("listening on {address}");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .context("server error")?;

        self.pool.close().await;
        Ok(())
    }
}
