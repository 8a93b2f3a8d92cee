//! Domain service for the site owner's identity.
//!
//! Handles credential checks for login, identity lookups for sessions, and
//! display-name changes from the settings page.

use thiserror::Error;

use crate::models::owner::SiteOwner;

/// Errors specific to authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Deliberately does not say whether the username or the password was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No site owner has been created yet.
    #[error("Site owner has not been created")]
    NotBootstrapped,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for AuthError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Domain service trait for authentication.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Verifies credentials against the site owner.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] if either field is wrong or
    /// no owner has been bootstrapped yet.
    async fn login(&self, username: &str, password: &str) -> Result<SiteOwner, AuthError>;

    /// The site owner, if one exists.
    async fn owner(&self) -> Result<Option<SiteOwner>, AuthError>;

    /// Resolves an identity pinned in a session.
    async fn owner_by_id(&self, id: i32) -> Result<Option<SiteOwner>, AuthError>;

    /// Changes the display name. The name must already be validated.
    async fn update_display_name(&self, id: i32, name: &str) -> Result<(), AuthError>;
}
