use crate::models::movie::{Movie, MovieField, MovieInput, SortDirection};
use crate::models::owner::SiteOwner;
use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    /// Connect without touching the schema; see [`Store::init_schema`].
    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:").trim_start_matches("//");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        info!(
            "Database connected (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    /// Create the schema, dropping every table first when `drop` is set.
    pub async fn init_schema(&self, drop: bool) -> Result<()> {
        use sea_orm_migration::MigratorTrait;

        if drop {
            migrator::Migrator::fresh(&self.conn).await?;
            info!("Dropped and recreated all tables");
        } else {
            migrator::Migrator::up(&self.conn, None).await?;
            info!("Schema migrations applied");
        }

        Ok(())
    }

    fn movie_repo(&self) -> repositories::movie::MovieRepository {
        repositories::movie::MovieRepository::new(self.conn.clone())
    }

    fn owner_repo(&self) -> repositories::owner::OwnerRepository {
        repositories::owner::OwnerRepository::new(self.conn.clone())
    }

    // ========================================================================
    // Movies
    // ========================================================================

    pub async fn create_movie(&self, input: &MovieInput) -> Result<Movie> {
        self.movie_repo().create(input).await
    }

    pub async fn get_movie(&self, id: i32) -> Result<Option<Movie>> {
        self.movie_repo().get(id).await
    }

    pub async fn list_movies(&self) -> Result<Vec<Movie>> {
        self.movie_repo().list_all().await
    }

    pub async fn list_movies_ordered_by(
        &self,
        field: MovieField,
        direction: SortDirection,
    ) -> Result<Vec<Movie>> {
        self.movie_repo().list_ordered_by(field, direction).await
    }

    pub async fn filter_movies_by_substring(
        &self,
        field: MovieField,
        term: &str,
    ) -> Result<Vec<Movie>> {
        self.movie_repo().filter_by_substring(field, term).await
    }

    pub async fn update_movie(&self, id: i32, input: &MovieInput) -> Result<Option<Movie>> {
        self.movie_repo().update(id, input).await
    }

    pub async fn delete_movie(&self, id: i32) -> Result<bool> {
        self.movie_repo().delete(id).await
    }

    pub async fn count_movies(&self) -> Result<u64> {
        self.movie_repo().count().await
    }

    // ========================================================================
    // Site owner
    // ========================================================================

    pub async fn get_owner(&self) -> Result<Option<SiteOwner>> {
        self.owner_repo().get().await
    }

    pub async fn get_owner_by_id(&self, id: i32) -> Result<Option<SiteOwner>> {
        self.owner_repo().get_by_id(id).await
    }

    pub async fn create_owner_with_catalog(
        &self,
        name: &str,
        username: &str,
        password_hash: &str,
        catalog: &[MovieInput],
    ) -> Result<SiteOwner> {
        self.owner_repo()
            .create_with_catalog(name, username, password_hash, catalog)
            .await
    }

    pub async fn update_owner_credentials(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<SiteOwner> {
        self.owner_repo()
            .update_credentials(username, password_hash)
            .await
    }

    pub async fn update_owner_name(&self, id: i32, name: &str) -> Result<bool> {
        self.owner_repo().update_name(id, name).await
    }
}
