pub mod prelude;

pub mod movies;
pub mod site_owner;
