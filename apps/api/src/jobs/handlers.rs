use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::jobs::client::{JobSearchProvider, SearchError};
use crate::jobs::filter::passes_filters;
use crate::jobs::hints::extract_hints;
use crate::jobs::models::{JobListing, SearchResponse};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchParams {
    pub query: String,
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

/// GET /jobs/search?query=<string>&page=<int>
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let results = run_search(&*state.search, &params.query, params.page).await?;
    Ok(Json(SearchResponse {
        status: "success",
        results,
    }))
}

/// The shared search pipeline: extract hints, call upstream once with the
/// FULL original query, post-filter, map survivors to listings.
pub async fn run_search(
    provider: &dyn JobSearchProvider,
    query: &str,
    page: u32,
) -> Result<Vec<JobListing>, SearchError> {
    let hints = extract_hints(query);
    debug!("extracted hints from query {query:?}: {hints:?}");

    let raw = provider.search(query, page, hints.location).await?;

    Ok(raw
        .iter()
        .filter(|job| passes_filters(job, &hints))
        .map(JobListing::from_raw)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::models::RawJob;
    use async_trait::async_trait;

    /// Stub provider returning a fixed payload (or a fixed error) and
    /// recording the location it was called with.
    struct StubProvider {
        jobs: Vec<RawJob>,
        expect_location: Option<&'static str>,
    }

    #[async_trait]
    impl JobSearchProvider for StubProvider {
        async fn search(
            &self,
            _query: &str,
            _page: u32,
            location: Option<&str>,
        ) -> Result<Vec<RawJob>, SearchError> {
            assert_eq!(location, self.expect_location);
            Ok(self.jobs.clone())
        }
    }

    fn job(title: &str, employer: &str) -> RawJob {
        RawJob {
            job_title: Some(title.to_string()),
            employer_name: Some(employer.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_run_search_forwards_extracted_location() {
        let provider = StubProvider {
            jobs: vec![],
            expect_location: Some("london"),
        };
        let results = run_search(&provider, "python jobs in london", 1)
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_run_search_drops_non_software_titles() {
        let provider = StubProvider {
            jobs: vec![job("Software Engineer", "Initech"), job("Head Chef", "Initech")],
            expect_location: None,
        };
        let results = run_search(&provider, "roles at initech", 1).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Software Engineer");
    }

    #[tokio::test]
    async fn test_run_search_applies_company_hint() {
        let provider = StubProvider {
            jobs: vec![job("Software Engineer", "Google LLC"), job("Software Engineer", "Initech")],
            expect_location: None,
        };
        let results = run_search(&provider, "google company", 1).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].company, "Google LLC");
    }
}
