//! `SeaORM` implementation of the `MovieService` trait.

use async_trait::async_trait;
use tracing::info;

use crate::db::Store;
use crate::models::movie::{Movie, MovieField, MovieInput, SortOption};
use crate::services::movie_service::{MovieError, MovieService, SearchResults};

pub struct SeaOrmMovieService {
    store: Store,
}

impl SeaOrmMovieService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MovieService for SeaOrmMovieService {
    async fn list(&self, sort: SortOption) -> Result<Vec<Movie>, MovieError> {
        let (field, direction) = sort.ordering();
        Ok(self.store.list_movies_ordered_by(field, direction).await?)
    }

    async fn get(&self, id: i32) -> Result<Movie, MovieError> {
        self.store
            .get_movie(id)
            .await?
            .ok_or(MovieError::NotFound(id))
    }

    async fn create(&self, input: &MovieInput) -> Result<Movie, MovieError> {
        let movie = self.store.create_movie(input).await?;
        info!(movie_id = movie.id, title = %movie.title, "Movie created");
        Ok(movie)
    }

    async fn update(&self, id: i32, input: &MovieInput) -> Result<Movie, MovieError> {
        let movie = self
            .store
            .update_movie(id, input)
            .await?
            .ok_or(MovieError::NotFound(id))?;
        info!(movie_id = id, "Movie updated");
        Ok(movie)
    }

    async fn delete(&self, id: i32) -> Result<(), MovieError> {
        if !self.store.delete_movie(id).await? {
            return Err(MovieError::NotFound(id));
        }
        info!(movie_id = id, "Movie deleted");
        Ok(())
    }

    async fn search(&self, term: &str) -> Result<SearchResults, MovieError> {
        let by_title = self
            .store
            .filter_movies_by_substring(MovieField::Title, term)
            .await?;
        let by_actor = self
            .store
            .filter_movies_by_substring(MovieField::Actor, term)
            .await?;

        Ok(SearchResults { by_title, by_actor })
    }
}
