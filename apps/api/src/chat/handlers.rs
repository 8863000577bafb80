use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::chat::format::{
    format_listings, FALLBACK_REPLY, GREETING_REPLY, NEAR_MISS_REPLY, NONE_SOFTWARE_REPLY,
    NO_RESULTS_REPLY, SERVER_BUSY_REPLY, THANKS_REPLY,
};
use crate::chat::intent::{classify, Intent};
use crate::jobs::client::JobSearchProvider;
use crate::jobs::filter::is_software_listing;
use crate::jobs::handlers::run_search;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /chat/
/// Always replies 200 with a prose string; upstream failures become the
/// canned busy message, never an error status.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let reply = match classify(&req.message) {
        Intent::Greeting => GREETING_REPLY.to_string(),
        Intent::Thanks => THANKS_REPLY.to_string(),
        Intent::JobQuery { search } => handle_job_query(&*state.search, &search).await,
        Intent::NearMiss => NEAR_MISS_REPLY.to_string(),
        Intent::Unknown => FALLBACK_REPLY.to_string(),
    };
    Json(ChatResponse { reply })
}

/// Runs the shared search pipeline at page 1, then keeps only
/// software-relevant listings before formatting.
async fn handle_job_query(provider: &dyn JobSearchProvider, search: &str) -> String {
    let listings = match run_search(provider, search, 1).await {
        Ok(listings) => listings,
        Err(err) => {
            warn!("job query {search:?} failed upstream: {err}");
            return SERVER_BUSY_REPLY.to_string();
        }
    };

    if listings.is_empty() {
        return NO_RESULTS_REPLY.to_string();
    }

    let software: Vec<_> = listings
        .into_iter()
        .filter(is_software_listing)
        .collect();

    if software.is_empty() {
        NONE_SOFTWARE_REPLY.to_string()
    } else {
        format_listings(&software)
    }
}
