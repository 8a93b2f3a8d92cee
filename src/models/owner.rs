use anyhow::Result;

use crate::config::SecurityConfig;
use crate::services::password;

/// The single privileged identity of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOwner {
    pub id: i32,

    /// Display name shown in the page header
    pub name: String,

    /// Login identifier
    pub username: String,

    pub password_hash: Option<String>,

    pub created_at: String,

    pub updated_at: String,
}

impl SiteOwner {
    /// Replaces the stored hash with a freshly salted one.
    pub fn set_password(&mut self, plaintext: &str, security: &SecurityConfig) -> Result<()> {
        self.password_hash = Some(password::hash_password(plaintext, security)?);
        Ok(())
    }

    /// Fails closed when no hash has ever been set.
    #[must_use]
    pub fn validate_password(&self, plaintext: &str) -> bool {
        self.password_hash
            .as_deref()
            .is_some_and(|hash| password::verify_password(plaintext, hash))
    }
}
