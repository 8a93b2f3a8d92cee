use axum::{
    Extension, Form,
    extract::State,
    response::{Html, Redirect},
};
use serde::Deserialize;
use std::sync::Arc;

use super::page::Page;
use super::session::FlashLevel;
use super::validation::validate_display_name;
use super::views;
use super::{ApiError, AppState};
use crate::constants::messages;
use crate::models::owner::SiteOwner;

#[derive(Deserialize)]
pub struct SettingsForm {
    pub name: Option<String>,
}

/// GET /settings
pub async fn settings_page(
    Extension(owner): Extension<SiteOwner>,
    page: Page,
) -> Result<Html<String>, ApiError> {
    page.render(|chrome| views::SettingsPage {
        chrome,
        name: &owner.name,
    })
    .await
}

/// POST /settings
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Extension(owner): Extension<SiteOwner>,
    page: Page,
    Form(form): Form<SettingsForm>,
) -> Result<Redirect, ApiError> {
    let Ok(name) = validate_display_name(form.name.as_deref()) else {
        page.flash(FlashLevel::Error, messages::INVALID_INPUT).await?;
        return Ok(Redirect::to("/settings"));
    };

    state.auth.update_display_name(owner.id, name).await?;
    tracing::info!(owner_id = owner.id, "Display name changed");
    page.flash(FlashLevel::Success, messages::SETTINGS_UPDATED)
        .await?;
    Ok(Redirect::to("/"))
}
