//! Server-rendered HTML pages. Templates live under `templates/` and are
//! HTML-escaped by askama.

use askama::Template;

use super::session::Flash;
use crate::constants::limits;
use crate::models::movie::{Movie, SortOption};
use crate::services::SearchResults;

/// Values the shared layout needs on every page.
pub struct Chrome {
    pub site_name: String,
    pub authenticated: bool,
    pub flashes: Vec<Flash>,
}

/// Values of the title/year/actor inputs.
#[derive(Default)]
pub struct MovieFields<'a> {
    pub title: &'a str,
    pub year: &'a str,
    pub actor: &'a str,
}

impl<'a> From<&'a Movie> for MovieFields<'a> {
    fn from(movie: &'a Movie) -> Self {
        Self {
            title: &movie.title,
            year: &movie.year,
            actor: &movie.actor,
        }
    }
}

pub struct SortChoice {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub chrome: Chrome,
    pub movies: &'a [Movie],
    /// Echoed back into the sort selector when the list was re-sorted.
    pub sort: Option<SortOption>,
    pub form: MovieFields<'a>,
}

impl<'a> IndexPage<'a> {
    #[must_use]
    pub fn new(chrome: Chrome, movies: &'a [Movie], sort: Option<SortOption>) -> Self {
        Self {
            chrome,
            movies,
            sort,
            form: MovieFields::default(),
        }
    }

    fn sort_choices(&self) -> [SortChoice; 2] {
        let choice = |option: SortOption, label| SortChoice {
            value: option.as_str(),
            label,
            selected: self.sort == Some(option),
        };
        [
            choice(SortOption::YearAscending, "Year (oldest first)"),
            choice(SortOption::YearDescending, "Year (newest first)"),
        ]
    }
}

#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditPage<'a> {
    pub chrome: Chrome,
    pub movie_id: i32,
    pub form: MovieFields<'a>,
}

impl<'a> EditPage<'a> {
    #[must_use]
    pub fn new(chrome: Chrome, movie: &'a Movie) -> Self {
        Self {
            chrome,
            movie_id: movie.id,
            form: MovieFields::from(movie),
        }
    }
}

#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsPage<'a> {
    pub chrome: Chrome,
    pub name: &'a str,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub chrome: Chrome,
}

#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchPage {
    pub chrome: Chrome,
}

#[derive(Template)]
#[template(path = "search_results.html")]
pub struct SearchResultsPage<'a> {
    pub chrome: Chrome,
    pub term: &'a str,
    pub results: &'a SearchResults,
}

/// Standalone; rendered where no session is available.
#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundPage;

#[derive(Template)]
#[template(path = "errors/500.html")]
pub struct ServerErrorPage;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::session::FlashLevel;

    fn chrome(authenticated: bool) -> Chrome {
        Chrome {
            site_name: "Admin".to_string(),
            authenticated,
            flashes: Vec::new(),
        }
    }

    fn movie(title: &str) -> Movie {
        Movie {
            id: 7,
            title: title.to_string(),
            year: "1994".to_string(),
            actor: "akk".to_string(),
        }
    }

    #[test]
    fn test_movie_values_are_escaped() {
        let movies = [movie("<script>alert(1)</script>")];
        let body = IndexPage::new(chrome(false), &movies, None)
            .render()
            .unwrap();
        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_edit_form_escapes_attributes() {
        let movie = movie(r#"Say "hi""#);
        let body = EditPage::new(chrome(true), &movie).render().unwrap();
        assert!(!body.contains(r#""hi""#));
        assert!(body.contains(r#"action="/movie/edit/7""#));
    }

    #[test]
    fn test_index_controls_follow_authentication() {
        let movies = [movie("Leon")];

        let anonymous = IndexPage::new(chrome(false), &movies, None)
            .render()
            .unwrap();
        assert!(!anonymous.contains("/movie/edit/7"));
        assert!(!anonymous.contains(r#"name="title""#));

        let owner = IndexPage::new(chrome(true), &movies, None)
            .render()
            .unwrap();
        assert!(owner.contains("/movie/edit/7"));
        assert!(owner.contains("/movie/delete/7"));
        assert!(owner.contains(r#"name="title""#));
        assert!(owner.contains(r#"maxlength="60""#));
    }

    #[test]
    fn test_index_keeps_selected_sort() {
        let body = IndexPage::new(chrome(false), &[], Some(SortOption::YearDescending))
            .render()
            .unwrap();
        assert!(body.contains(r#"value="year_desc" selected"#));
        assert!(!body.contains(r#"value="year_asc" selected"#));
        assert!(body.contains("0 Titles"));
    }

    #[test]
    fn test_layout_renders_flashes_and_name() {
        let page = LoginPage {
            chrome: Chrome {
                site_name: "Admin & Co".to_string(),
                authenticated: false,
                flashes: vec![Flash {
                    level: FlashLevel::Error,
                    message: "Invalid input.".to_string(),
                }],
            },
        };
        let body = page.render().unwrap();
        assert!(body.contains(r#"<div class="alert alert-error">Invalid input.</div>"#));
        assert!(body.contains("Admin &amp; Co"));
        assert!(body.contains(r#"href="/login""#));
        assert!(!body.contains(r#"href="/logout""#));
    }

    #[test]
    fn test_search_results_mark_empty_sections() {
        let results = SearchResults {
            by_title: vec![movie("My Neighbor Totoro")],
            by_actor: Vec::new(),
        };
        let body = SearchResultsPage {
            chrome: chrome(false),
            term: "Totoro",
            results: &results,
        }
        .render()
        .unwrap();
        assert!(body.contains(r#"Results for "Totoro""#));
        assert!(body.contains(r#"<ul class="movie-list by-title">"#));
        assert!(body.contains(r#"<p class="by-actor empty">No matches.</p>"#));
    }

    #[test]
    fn test_error_pages_render_standalone() {
        assert!(NotFoundPage.render().unwrap().contains("Page Not Found"));
        assert!(ServerErrorPage.render().unwrap().contains("500"));
    }
}
