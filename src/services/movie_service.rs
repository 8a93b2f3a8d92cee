//! Domain service for the movie catalog.

use thiserror::Error;

use crate::models::movie::{Movie, MovieInput, SortOption};

#[derive(Debug, Error)]
pub enum MovieError {
    #[error("Movie not found: {0}")]
    NotFound(i32),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for MovieError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for MovieError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Title and actor matches for one search term, kept separate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub by_title: Vec<Movie>,
    pub by_actor: Vec<Movie>,
}

/// Domain service trait for catalog operations.
///
/// Inputs reaching this trait have already passed form validation.
#[async_trait::async_trait]
pub trait MovieService: Send + Sync {
    async fn list(&self, sort: SortOption) -> Result<Vec<Movie>, MovieError>;

    /// # Errors
    ///
    /// Returns [`MovieError::NotFound`] if no movie has this id.
    async fn get(&self, id: i32) -> Result<Movie, MovieError>;

    async fn create(&self, input: &MovieInput) -> Result<Movie, MovieError>;

    async fn update(&self, id: i32, input: &MovieInput) -> Result<Movie, MovieError>;

    async fn delete(&self, id: i32) -> Result<(), MovieError>;

    async fn search(&self, term: &str) -> Result<SearchResults, MovieError>;
}
