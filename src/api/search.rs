use axum::{Form, extract::State, response::Html};
use serde::Deserialize;
use std::sync::Arc;

use super::page::Page;
use super::views;
use super::{ApiError, AppState};

#[derive(Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// GET /search
pub async fn search_page(page: Page) -> Result<Html<String>, ApiError> {
    page.render(|chrome| views::SearchPage { chrome }).await
}

/// POST /search
///
/// Title and actor are matched independently. An empty term matches
/// everything.
pub async fn search(
    State(state): State<Arc<AppState>>,
    page: Page,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, ApiError> {
    let results = state.movies.search(&form.search_term).await?;
    tracing::debug!(
        term = %form.search_term,
        by_title = results.by_title.len(),
        by_actor = results.by_actor.len(),
        "Search finished"
    );
    page.render(|chrome| views::SearchResultsPage {
        chrome,
        term: &form.search_term,
        results: &results,
    })
    .await
}
