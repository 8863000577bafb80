pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat;
use crate::jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::home_handler))
        .route("/health", get(health::health_handler))
        .route("/chat/", post(chat::handlers::chat_handler))
        .route("/jobs/search", get(jobs::handlers::search_handler))
        .with_state(state)
}
