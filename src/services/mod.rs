pub mod password;

pub mod bootstrap;
pub use bootstrap::AdminOutcome;

pub mod auth_service;
pub mod auth_service_impl;
pub use auth_service::{AuthError, AuthService};
pub use auth_service_impl::SeaOrmAuthService;

pub mod movie_service;
pub mod movie_service_impl;
pub use movie_service::{MovieError, MovieService, SearchResults};
pub use movie_service_impl::SeaOrmMovieService;
