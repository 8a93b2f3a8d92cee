pub mod movie;
pub mod owner;
