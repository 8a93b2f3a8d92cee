//! `SeaORM` implementation of the `AuthService` trait.

use crate::db::Store;
use crate::models::owner::SiteOwner;
use crate::services::auth_service::{AuthError, AuthService};
use async_trait::async_trait;
use tokio::task;

pub struct SeaOrmAuthService {
    store: Store,
}

impl SeaOrmAuthService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AuthService for SeaOrmAuthService {
    async fn login(&self, username: &str, password: &str) -> Result<SiteOwner, AuthError> {
        let Some(owner) = self.store.get_owner().await? else {
            tracing::warn!("Login attempted before the site owner was created");
            return Err(AuthError::InvalidCredentials);
        };

        let username_matches = owner.username == username;

        // Argon2 verification is CPU-bound; it always runs so a wrong
        // username takes as long as a wrong password.
        let candidate = owner.clone();
        let password = password.to_string();
        let password_matches = task::spawn_blocking(move || candidate.validate_password(&password))
            .await
            .map_err(|e| AuthError::Internal(format!("Password verification task failed: {e}")))?;

        if username_matches && password_matches {
            Ok(owner)
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    async fn owner(&self) -> Result<Option<SiteOwner>, AuthError> {
        Ok(self.store.get_owner().await?)
    }

    async fn owner_by_id(&self, id: i32) -> Result<Option<SiteOwner>, AuthError> {
        Ok(self.store.get_owner_by_id(id).await?)
    }

    async fn update_display_name(&self, id: i32, name: &str) -> Result<(), AuthError> {
        if self.store.update_owner_name(id, name).await? {
            Ok(())
        } else {
            Err(AuthError::NotBootstrapped)
        }
    }
}
