//! Member Server
//!
//! A small REST service exposing CRUD over a single member entity, backed
//! by an in-memory store that is seeded with two records at startup.

pub mod handlers;
pub mod seed;
pub mod storage;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use storage::MemberRepository;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MemberRepository>,
}

/// Builds the HTTP router: the full route table plus CORS and trace layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/hello", get(handlers::hello))
        .route(
            "/member",
            get(handlers::members::list).post(handlers::members::create),
        )
        .route(
            "/member/:id",
            get(handlers::members::get).delete(handlers::members::delete),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
