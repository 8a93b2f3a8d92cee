use serde::{Deserialize, Serialize};

use crate::constants::sort;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub id: i32,

    pub title: String,

    pub year: String,

    pub actor: String,
}

/// Field values for a movie that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieInput {
    pub title: String,

    pub year: String,

    pub actor: String,
}

impl MovieInput {
    #[must_use]
    pub fn new(title: impl Into<String>, year: impl Into<String>, actor: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
            actor: actor.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieField {
    Title,
    Year,
    Actor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Ordering requested by the index page's sort form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    YearAscending,
    YearDescending,
}

impl SortOption {
    /// Unrecognized values fall back to ascending by year.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            sort::YEAR_DESC => Self::YearDescending,
            _ => Self::YearAscending,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::YearAscending => sort::YEAR_ASC,
            Self::YearDescending => sort::YEAR_DESC,
        }
    }

    #[must_use]
    pub const fn ordering(self) -> (MovieField, SortDirection) {
        match self {
            Self::YearAscending => (MovieField::Year, SortDirection::Ascending),
            Self::YearDescending => (MovieField::Year, SortDirection::Descending),
        }
    }
}
