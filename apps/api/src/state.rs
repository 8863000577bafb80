use std::sync::Arc;

use crate::jobs::client::JobSearchProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Upstream job-search provider behind a trait object, so handler
    /// tests can swap in a stub.
    pub search: Arc<dyn JobSearchProvider>,
}
