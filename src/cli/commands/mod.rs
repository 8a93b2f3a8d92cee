mod admin;
mod init;
mod initdb;
mod serve;

pub use admin::cmd_admin;
pub use init::cmd_init;
pub use initdb::cmd_initdb;
pub use serve::cmd_serve;
