//! Per-request session state: the pinned identity and flash notices.
//!
//! Both live in the `tower-sessions` record keyed by the signed session
//! cookie, so nothing about the caller is held in process-wide state.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tower_sessions::session::Error;

use crate::constants::session_keys;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    Anonymous,
    Authenticated(i32),
}

pub async fn identity(session: &Session) -> Result<Identity, Error> {
    Ok(session
        .get::<i32>(session_keys::OWNER_ID)
        .await?
        .map_or(Identity::Anonymous, Identity::Authenticated))
}

/// Anonymous -> Authenticated. The session id is rotated first.
pub async fn sign_in(session: &Session, owner_id: i32) -> Result<(), Error> {
    session.cycle_id().await?;
    session.insert(session_keys::OWNER_ID, owner_id).await
}

/// Authenticated -> Anonymous. Pending flash notices survive.
pub async fn sign_out(session: &Session) -> Result<(), Error> {
    session.remove::<i32>(session_keys::OWNER_ID).await?;
    session.cycle_id().await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert alert-success",
            Self::Error => "alert alert-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

/// Queue a notice for the next rendered page.
pub async fn push_flash(
    session: &Session,
    level: FlashLevel,
    message: impl Into<String>,
) -> Result<(), Error> {
    let mut flashes: Vec<Flash> = session
        .get(session_keys::FLASHES)
        .await?
        .unwrap_or_default();
    flashes.push(Flash {
        level,
        message: message.into(),
    });
    session.insert(session_keys::FLASHES, flashes).await
}

/// Remove and return every queued notice.
pub async fn take_flashes(session: &Session) -> Result<Vec<Flash>, Error> {
    Ok(session
        .remove::<Vec<Flash>>(session_keys::FLASHES)
        .await?
        .unwrap_or_default())
}
