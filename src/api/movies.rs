use axum::{
    Extension, Form,
    extract::{Path, State, rejection::PathRejection},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use super::page::Page;
use super::session::FlashLevel;
use super::validation::validate_movie;
use super::views;
use super::{ApiError, AppState};
use crate::constants::messages;
use crate::models::movie::SortOption;
use crate::models::owner::SiteOwner;

#[derive(Deserialize)]
pub struct IndexForm {
    pub sort_option: Option<String>,
    pub title: Option<String>,
    pub year: Option<String>,
    pub actor: Option<String>,
}

#[derive(Deserialize)]
pub struct MovieForm {
    pub title: Option<String>,
    pub year: Option<String>,
    pub actor: Option<String>,
}

/// Non-integer ids behave like an unmatched route.
fn movie_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|e| ApiError::NotFound(format!("Invalid movie id: {e}")))
}

/// GET /
pub async fn index(State(state): State<Arc<AppState>>, page: Page) -> Result<Html<String>, ApiError> {
    let movies = state.movies.list(SortOption::default()).await?;
    page.render(|chrome| views::IndexPage::new(chrome, &movies, None))
        .await
}

/// POST /
///
/// A non-empty `sort_option` reorders the list; otherwise the form is a
/// movie submission, which requires login.
pub async fn index_submit(
    State(state): State<Arc<AppState>>,
    page: Page,
    Form(form): Form<IndexForm>,
) -> Result<Response, ApiError> {
    if let Some(option) = form.sort_option.as_deref().filter(|s| !s.is_empty()) {
        let sort = SortOption::parse(option);
        let movies = state.movies.list(sort).await?;
        let html = page
            .render(|chrome| views::IndexPage::new(chrome, &movies, Some(sort)))
            .await?;
        return Ok(html.into_response());
    }

    if !page.is_authenticated() {
        page.flash(FlashLevel::Error, messages::LOGIN_REQUIRED).await?;
        return Ok(Redirect::to("/login").into_response());
    }

    match validate_movie(
        form.title.as_deref(),
        form.year.as_deref(),
        form.actor.as_deref(),
    ) {
        Ok(input) => {
            state.movies.create(&input).await?;
            page.flash(FlashLevel::Success, messages::ITEM_CREATED).await?;
        }
        Err(e) => {
            tracing::debug!("Rejected movie submission: {}", e);
            page.flash(FlashLevel::Error, messages::INVALID_INPUT).await?;
        }
    }

    let movies = state.movies.list(SortOption::default()).await?;
    let html = page
        .render(|chrome| views::IndexPage::new(chrome, &movies, None))
        .await?;
    Ok(html.into_response())
}

/// GET /movie/edit/{id}
pub async fn edit_page(
    State(state): State<Arc<AppState>>,
    page: Page,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Html<String>, ApiError> {
    let movie = state.movies.get(movie_id(path)?).await?;
    page.render(|chrome| views::EditPage::new(chrome, &movie))
        .await
}

/// POST /movie/edit/{id}
pub async fn edit(
    State(state): State<Arc<AppState>>,
    page: Page,
    path: Result<Path<i32>, PathRejection>,
    Form(form): Form<MovieForm>,
) -> Result<Redirect, ApiError> {
    let id = movie_id(path)?;
    // 404 takes precedence over input errors.
    state.movies.get(id).await?;

    let input = match validate_movie(
        form.title.as_deref(),
        form.year.as_deref(),
        form.actor.as_deref(),
    ) {
        Ok(input) => input,
        Err(e) => {
            tracing::debug!(movie_id = id, "Rejected movie edit: {}", e);
            page.flash(FlashLevel::Error, messages::INVALID_INPUT).await?;
            return Ok(Redirect::to(&format!("/movie/edit/{id}")));
        }
    };

    state.movies.update(id, &input).await?;
    page.flash(FlashLevel::Success, messages::ITEM_UPDATED).await?;
    Ok(Redirect::to("/"))
}

/// POST /movie/delete/{id}
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Extension(owner): Extension<SiteOwner>,
    page: Page,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Redirect, ApiError> {
    let id = movie_id(path)?;
    state.movies.delete(id).await?;
    tracing::info!(movie_id = id, owner = %owner.username, "Deleted from catalog");
    page.flash(FlashLevel::Success, messages::ITEM_DELETED).await?;
    Ok(Redirect::to("/"))
}
