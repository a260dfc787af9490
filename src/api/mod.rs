pub mod common;
pub mod health;
pub mod quotes;

pub use health::health;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::AppState;

pub fn router(state: Arc<AppState>, server: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(quotes::home_page))
        .route("/new-quote", get(quotes::new_quote))
        .route(
            "/set-category",
            get(quotes::set_category).post(quotes::set_category),
        )
        .route(
            "/generate-quote",
            get(quotes::generate_quote).post(quotes::generate_quote),
        )
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(&server.static_dir))
        .nest_service("/assets", ServeDir::new(&server.assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
