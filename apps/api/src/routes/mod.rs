pub mod health;

use axum::{
    response::Html,
    routing::{get, post},
    Router,
};

use crate::humanize::handlers;
use crate::state::AppState;

/// GET / — embedded single-page client.
async fn serve_index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/health", get(health::health_handler))
        .route("/api/generate", post(handlers::handle_generate))
        .with_state(state)
}
