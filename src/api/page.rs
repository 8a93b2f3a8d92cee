use askama::Template;
use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::Html,
};
use std::sync::Arc;
use tower_sessions::Session;

use super::session::{self, FlashLevel, Identity};
use super::views::Chrome;
use super::{ApiError, AppState};
use crate::constants::DEFAULT_DISPLAY_NAME;
use crate::models::owner::SiteOwner;

/// Request-scoped view of who is calling and whose site this is.
///
/// Flash notices are only taken when a page is actually rendered, so a
/// handler that redirects leaves them queued for the next page.
pub struct Page {
    session: Session,
    site_owner: Option<SiteOwner>,
    authenticated: bool,
}

impl Page {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub fn site_name(&self) -> &str {
        self.site_owner
            .as_ref()
            .map_or(DEFAULT_DISPLAY_NAME, |owner| owner.name.as_str())
    }

    pub async fn flash(&self, level: FlashLevel, message: &str) -> Result<(), ApiError> {
        Ok(session::push_flash(&self.session, level, message).await?)
    }

    /// Render a page built from the layout values of this request.
    pub async fn render<T, F>(&self, build: F) -> Result<Html<String>, ApiError>
    where
        T: Template,
        F: FnOnce(Chrome) -> T,
    {
        let chrome = Chrome {
            site_name: self.site_name().to_string(),
            authenticated: self.authenticated,
            flashes: session::take_flashes(&self.session).await?,
        };
        Ok(Html(build(chrome).render()?))
    }
}

impl FromRequestParts<Arc<AppState>> for Page {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| ApiError::internal(msg))?;

        let site_owner = state.auth.owner().await?;
        let authenticated = match session::identity(&session).await? {
            Identity::Authenticated(id) => site_owner.as_ref().is_some_and(|o| o.id == id),
            Identity::Anonymous => false,
        };

        Ok(Self {
            session,
            site_owner,
            authenticated,
        })
    }
}
