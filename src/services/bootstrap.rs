//! Out-of-band setup: schema creation and the site owner account.

use anyhow::{Context, Result};
use tokio::task;
use tracing::info;

use crate::config::SecurityConfig;
use crate::constants::{DEFAULT_DISPLAY_NAME, SEED_MOVIES, limits};
use crate::db::Store;
use crate::models::movie::MovieInput;
use crate::services::password;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminOutcome {
    /// A new owner was written together with the sample catalog.
    Created,
    /// The existing owner's credentials were overwritten.
    Updated,
}

#[must_use]
pub fn seed_catalog() -> Vec<MovieInput> {
    SEED_MOVIES
        .iter()
        .map(|(title, year, actor)| MovieInput::new(*title, *year, *actor))
        .collect()
}

/// The username must fit the login form, so it is held to the same limit.
pub fn check_admin_credentials(username: &str, plaintext: &str) -> Result<()> {
    if username.is_empty() {
        anyhow::bail!("Username cannot be empty");
    }
    if username.chars().count() > limits::USERNAME_MAX_CHARS {
        anyhow::bail!(
            "Username cannot be longer than {} characters",
            limits::USERNAME_MAX_CHARS
        );
    }
    if plaintext.is_empty() {
        anyhow::bail!("Password cannot be empty");
    }
    Ok(())
}

pub async fn init_schema(store: &Store, drop: bool) -> Result<()> {
    store.init_schema(drop).await
}

/// Create the site owner, or overwrite username and password if it exists.
/// The sample catalog is only written on first creation.
pub async fn create_or_update_admin(
    store: &Store,
    security: &SecurityConfig,
    username: &str,
    plaintext: &str,
) -> Result<AdminOutcome> {
    check_admin_credentials(username, plaintext)?;
    store.init_schema(false).await?;

    let security = security.clone();
    let plaintext = plaintext.to_string();
    let password_hash = task::spawn_blocking(move || password::hash_password(&plaintext, &security))
        .await
        .context("Password hashing task panicked")??;

    if store.get_owner().await?.is_some() {
        store
            .update_owner_credentials(username, &password_hash)
            .await?;
        info!("Updated site owner credentials for '{}'", username);
        return Ok(AdminOutcome::Updated);
    }

    store
        .create_owner_with_catalog(
            DEFAULT_DISPLAY_NAME,
            username,
            &password_hash,
            &seed_catalog(),
        )
        .await?;

    Ok(AdminOutcome::Created)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> Store {
        let db_path =
            std::env::temp_dir().join(format!("watchlist-bootstrap-{}.db", uuid::Uuid::new_v4()));
        Store::new(&format!("sqlite:{}", db_path.display()))
            .await
            .unwrap()
    }

    fn cheap() -> SecurityConfig {
        SecurityConfig {
            argon2_memory_cost_kib: 1024,
            argon2_time_cost: 1,
            ..SecurityConfig::default()
        }
    }

    #[tokio::test]
    async fn test_fresh_bootstrap_seeds_owner_and_catalog() {
        let store = store().await;

        let outcome = create_or_update_admin(&store, &cheap(), "admin", "x")
            .await
            .unwrap();
        assert_eq!(outcome, AdminOutcome::Created);

        let owner = store.get_owner().await.unwrap().unwrap();
        assert_eq!(owner.username, "admin");
        assert_eq!(owner.name, DEFAULT_DISPLAY_NAME);
        assert!(owner.validate_password("x"));

        let movies = store.list_movies().await.unwrap();
        assert_eq!(movies.len(), 10);
        assert_eq!(movies[0].title, "My Neighbor Totoro");
        assert_eq!(movies[0].year, "1988");
        assert_eq!(movies[0].actor, "akk");
        assert_eq!(movies[9].title, "The Pork of Music");
    }

    #[tokio::test]
    async fn test_second_run_updates_without_reseeding() {
        let store = store().await;
        create_or_update_admin(&store, &cheap(), "admin", "x")
            .await
            .unwrap();

        let outcome = create_or_update_admin(&store, &cheap(), "owner", "y")
            .await
            .unwrap();
        assert_eq!(outcome, AdminOutcome::Updated);

        let owner = store.get_owner().await.unwrap().unwrap();
        assert_eq!(owner.username, "owner");
        assert!(owner.validate_password("y"));
        assert!(!owner.validate_password("x"));
        assert_eq!(store.count_movies().await.unwrap(), 10);
    }

    #[tokio::test]
    async fn test_rejects_credentials_the_login_form_cannot_submit() {
        let store = store().await;

        let too_long = "u".repeat(limits::USERNAME_MAX_CHARS + 1);
        assert!(
            create_or_update_admin(&store, &cheap(), &too_long, "x")
                .await
                .is_err()
        );
        assert!(create_or_update_admin(&store, &cheap(), "", "x").await.is_err());
        assert!(create_or_update_admin(&store, &cheap(), "admin", "").await.is_err());
        assert!(store.get_owner().await.unwrap().is_none());

        let at_limit = "u".repeat(limits::USERNAME_MAX_CHARS);
        assert_eq!(
            create_or_update_admin(&store, &cheap(), &at_limit, "x")
                .await
                .unwrap(),
            AdminOutcome::Created
        );
    }

    #[tokio::test]
    async fn test_init_schema_drop_clears_data() {
        let store = store().await;
        create_or_update_admin(&store, &cheap(), "admin", "x")
            .await
            .unwrap();

        init_schema(&store, true).await.unwrap();

        assert!(store.get_owner().await.unwrap().is_none());
        assert_eq!(store.count_movies().await.unwrap(), 0);
    }
}
