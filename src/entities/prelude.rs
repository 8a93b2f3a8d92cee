pub use super::movies::Entity as Movies;
pub use super::site_owner::Entity as SiteOwner;
