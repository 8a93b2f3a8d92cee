use axum::{
    Form,
    extract::{Request, State},
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;

use super::page::Page;
use super::session::{self, FlashLevel, Identity};
use super::validation::validate_credentials;
use super::views;
use super::{ApiError, AppState};
use crate::constants::messages;
use crate::models::owner::SiteOwner;
use crate::services::AuthError;

// ============================================================================
// Request Types
// ============================================================================

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

// ============================================================================
// Middleware
// ============================================================================

/// Resolve the session's pinned identity. A stale id whose owner no longer
/// exists is dropped and treated as anonymous.
pub async fn authenticated_owner(
    state: &AppState,
    session: &Session,
) -> Result<Option<SiteOwner>, ApiError> {
    let Identity::Authenticated(id) = session::identity(session).await? else {
        return Ok(None);
    };

    let owner = state.auth.owner_by_id(id).await?;
    if owner.is_none() {
        tracing::info!(owner_id = id, "Dropping session identity for missing owner");
        session::sign_out(session).await?;
    }
    Ok(owner)
}

/// Guards login-required routes. Anonymous callers are redirected to the
/// login page; authenticated ones get the owner as a request extension.
pub async fn require_login(
    State(state): State<Arc<AppState>>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(owner) = authenticated_owner(&state, &session).await? {
        tracing::Span::current().record("user_id", owner.username.as_str());
        request.extensions_mut().insert(owner);
        return Ok(next.run(request).await);
    }

    session::push_flash(&session, FlashLevel::Error, messages::LOGIN_REQUIRED).await?;
    Ok(Redirect::to("/login").into_response())
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /login
pub async fn login_page(page: Page) -> Result<Html<String>, ApiError> {
    page.render(|chrome| views::LoginPage { chrome }).await
}

/// POST /login
pub async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, ApiError> {
    let Ok((username, password)) =
        validate_credentials(form.username.as_deref(), form.password.as_deref())
    else {
        session::push_flash(&session, FlashLevel::Error, messages::INVALID_INPUT).await?;
        return Ok(Redirect::to("/login"));
    };

    match state.auth.login(username, password).await {
        Ok(owner) => {
            session::sign_in(&session, owner.id).await?;
            session::push_flash(&session, FlashLevel::Success, messages::LOGIN_SUCCESS).await?;
            tracing::info!(owner_id = owner.id, "Login succeeded");
            Ok(Redirect::to("/"))
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!("Login failed");
            session::push_flash(&session, FlashLevel::Error, messages::INVALID_CREDENTIALS)
                .await?;
            Ok(Redirect::to("/login"))
        }
        Err(e) => Err(e.into()),
    }
}

/// GET|POST /logout
pub async fn logout(session: Session) -> Result<Redirect, ApiError> {
    session::sign_out(&session).await?;
    session::push_flash(&session, FlashLevel::Success, messages::GOODBYE).await?;
    tracing::info!("Logged out");
    Ok(Redirect::to("/"))
}
