use crate::entities::{movies, prelude::*};
use crate::models::movie::{Movie, MovieField, MovieInput, SortDirection};
use anyhow::{Context, Result};
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

/// Repository for movie catalog operations
pub struct MovieRepository {
    conn: DatabaseConnection,
}

impl MovieRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    // ========================================================================
    // Model Conversion Helpers
    // ========================================================================

    fn map_model(m: movies::Model) -> Movie {
        Movie {
            id: m.id,
            title: m.title,
            year: m.year,
            actor: m.actor,
        }
    }

    const fn column(field: MovieField) -> movies::Column {
        match field {
            MovieField::Title => movies::Column::Title,
            MovieField::Year => movies::Column::Year,
            MovieField::Actor => movies::Column::Actor,
        }
    }

    // ========================================================================
    // Movie Operations
    // ========================================================================

    pub async fn create(&self, input: &MovieInput) -> Result<Movie> {
        Self::insert_with(&self.conn, input).await
    }

    /// Insert on any connection, so callers can group several inserts in one
    /// transaction.
    pub async fn insert_with<C: ConnectionTrait>(conn: &C, input: &MovieInput) -> Result<Movie> {
        let active_model = movies::ActiveModel {
            title: Set(input.title.clone()),
            year: Set(input.year.clone()),
            actor: Set(input.actor.clone()),
            ..Default::default()
        };

        let model = active_model
            .insert(conn)
            .await
            .context("Failed to insert movie")?;

        Ok(Self::map_model(model))
    }

    pub async fn get(&self, id: i32) -> Result<Option<Movie>> {
        let movie = Movies::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query movie by ID")?;

        Ok(movie.map(Self::map_model))
    }

    /// All movies in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Movie>> {
        let rows = Movies::find()
            .order_by_asc(movies::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    /// Ties on the ordered field break by id in the same direction, so
    /// the two directions are exact reverses of each other.
    pub async fn list_ordered_by(
        &self,
        field: MovieField,
        direction: SortDirection,
    ) -> Result<Vec<Movie>> {
        let column = Self::column(field);
        let query = match direction {
            SortDirection::Ascending => Movies::find()
                .order_by_asc(column)
                .order_by_asc(movies::Column::Id),
            SortDirection::Descending => Movies::find()
                .order_by_desc(column)
                .order_by_desc(movies::Column::Id),
        };

        let rows = query.all(&self.conn).await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    /// Movies whose `field` contains `term` as a contiguous substring.
    /// `%` and `_` in the term match literally; case folding follows the
    /// store's LIKE semantics.
    pub async fn filter_by_substring(&self, field: MovieField, term: &str) -> Result<Vec<Movie>> {
        let pattern = LikeExpr::new(format!("%{}%", escape_like(term))).escape('\\');

        let rows = Movies::find()
            .filter(Expr::col(Self::column(field)).like(pattern))
            .order_by_asc(movies::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    /// Returns `None` when no movie has this id.
    pub async fn update(&self, id: i32, input: &MovieInput) -> Result<Option<Movie>> {
        let Some(existing) = Movies::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        let mut active: movies::ActiveModel = existing.into();
        active.title = Set(input.title.clone());
        active.year = Set(input.year.clone());
        active.actor = Set(input.actor.clone());
        let model = active
            .update(&self.conn)
            .await
            .context("Failed to update movie")?;

        Ok(Some(Self::map_model(model)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = Movies::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Movies::find().count(&self.conn).await?)
    }
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
