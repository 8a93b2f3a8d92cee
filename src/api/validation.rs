use crate::constants::limits;
use crate::models::movie::MovieInput;

/// A form value that failed its emptiness or length bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid value for '{}'", self.field)
    }
}

/// Lengths are counted in characters, not bytes.
fn bounded<'a>(
    field: &'static str,
    value: Option<&'a str>,
    max_chars: usize,
) -> Result<&'a str, ValidationError> {
    match value {
        Some(v) if !v.is_empty() && v.chars().count() <= max_chars => Ok(v),
        _ => Err(ValidationError { field }),
    }
}

pub fn validate_movie(
    title: Option<&str>,
    year: Option<&str>,
    actor: Option<&str>,
) -> Result<MovieInput, ValidationError> {
    let title = bounded("title", title, limits::TITLE_MAX_CHARS)?;
    let year = bounded("year", year, limits::YEAR_MAX_CHARS)?;
    let actor = bounded("actor", actor, limits::ACTOR_MAX_CHARS)?;
    Ok(MovieInput::new(title, year, actor))
}

pub fn validate_display_name(name: Option<&str>) -> Result<&str, ValidationError> {
    bounded("name", name, limits::DISPLAY_NAME_MAX_CHARS)
}

/// Both login fields must be present and non-empty.
pub fn validate_credentials<'a>(
    username: Option<&'a str>,
    password: Option<&'a str>,
) -> Result<(&'a str, &'a str), ValidationError> {
    match (username, password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => Ok((u, p)),
        (Some(u), _) if !u.is_empty() => Err(ValidationError { field: "password" }),
        _ => Err(ValidationError { field: "username" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_movie_bounds() {
        assert!(validate_movie(Some("Leon"), Some("1994"), Some("akk")).is_ok());
        assert!(
            validate_movie(
                Some("t".repeat(60).as_str()),
                Some("1994"),
                Some("a".repeat(60).as_str())
            )
            .is_ok()
        );

        assert!(validate_movie(Some(""), Some("1994"), Some("akk")).is_err());
        assert!(validate_movie(None, Some("1994"), Some("akk")).is_err());
        assert!(validate_movie(Some("Leon"), Some("19945"), Some("akk")).is_err());
        assert!(validate_movie(Some("t".repeat(61).as_str()), Some("1994"), Some("akk")).is_err());
        assert!(validate_movie(Some("Leon"), Some("1994"), Some("a".repeat(61).as_str())).is_err());
        assert!(validate_movie(Some("Leon"), Some("1994"), None).is_err());
    }

    #[test]
    fn test_validate_movie_counts_characters() {
        // 60 two-byte characters fit.
        let title = "é".repeat(60);
        assert!(validate_movie(Some(&title), Some("年年年年"), Some("akk")).is_ok());
    }

    #[test]
    fn test_validate_movie_reports_first_bad_field() {
        let err = validate_movie(Some("Leon"), Some(""), Some("")).unwrap_err();
        assert_eq!(err.field, "year");
    }

    #[test]
    fn test_validate_display_name() {
        assert!(validate_display_name(Some("a".repeat(20).as_str())).is_ok());
        assert!(validate_display_name(Some("a".repeat(21).as_str())).is_err());
        assert!(validate_display_name(Some("")).is_err());
        assert!(validate_display_name(None).is_err());
    }

    #[test]
    fn test_validate_credentials() {
        assert_eq!(
            validate_credentials(Some("admin"), Some("x")),
            Ok(("admin", "x"))
        );
        assert!(validate_credentials(Some("admin"), Some("")).is_err());
        assert!(validate_credentials(None, Some("x")).is_err());
        assert!(validate_credentials(Some(""), None).is_err());
    }
}
