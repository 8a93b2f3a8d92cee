use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use tracing::info;

use crate::constants::SITE_OWNER_ID;
use crate::db::repositories::movie::MovieRepository;
use crate::entities::{prelude::*, site_owner};
use crate::models::movie::MovieInput;
use crate::models::owner::SiteOwner as Owner;

impl From<site_owner::Model> for Owner {
    fn from(model: site_owner::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            username: model.username,
            password_hash: model.password_hash,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Repository for the one-row site owner table
pub struct OwnerRepository {
    conn: DatabaseConnection,
}

impl OwnerRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// The site owner, if one has been bootstrapped.
    pub async fn get(&self) -> Result<Option<Owner>> {
        self.get_by_id(SITE_OWNER_ID).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Owner>> {
        let owner = SiteOwner::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query site owner")?;

        Ok(owner.map(Owner::from))
    }

    /// Insert the owner and the seed catalog in one transaction.
    pub async fn create_with_catalog(
        &self,
        name: &str,
        username: &str,
        password_hash: &str,
        catalog: &[MovieInput],
    ) -> Result<Owner> {
        let now = chrono::Utc::now().to_rfc3339();
        let txn = self.conn.begin().await?;

        let owner = site_owner::ActiveModel {
            id: Set(SITE_OWNER_ID),
            name: Set(name.to_string()),
            username: Set(username.to_string()),
            password_hash: Set(Some(password_hash.to_string())),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .context("Failed to insert site owner")?;

        for movie in catalog {
            MovieRepository::insert_with(&txn, movie).await?;
        }

        txn.commit().await?;
        info!(
            "Created site owner '{}' with {} seed movies",
            username,
            catalog.len()
        );

        Ok(Owner::from(owner))
    }

    /// Overwrite login username and password hash of the existing owner.
    pub async fn update_credentials(&self, username: &str, password_hash: &str) -> Result<Owner> {
        let owner = SiteOwner::find_by_id(SITE_OWNER_ID)
            .one(&self.conn)
            .await
            .context("Failed to query site owner for credential update")?
            .ok_or_else(|| anyhow::anyhow!("Site owner has not been created"))?;

        let mut active: site_owner::ActiveModel = owner.into();
        active.username = Set(username.to_string());
        active.password_hash = Set(Some(password_hash.to_string()));
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());
        let model = active.update(&self.conn).await?;

        Ok(Owner::from(model))
    }

    /// Returns `false` when no owner has this id.
    pub async fn update_name(&self, id: i32, name: &str) -> Result<bool> {
        let Some(owner) = SiteOwner::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query site owner for rename")?
        else {
            return Ok(false);
        };

        let mut active: site_owner::ActiveModel = owner.into();
        active.name = Set(name.to_string());
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());
        active.update(&self.conn).await?;

        Ok(true)
    }
}
