//! Initialize database command handler

use crate::config::Config;
use crate::db::Store;
use crate::services::bootstrap;

pub async fn cmd_initdb(config: &Config, drop: bool) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    bootstrap::init_schema(&store, drop).await?;

    println!("Initialized database.");
    Ok(())
}
