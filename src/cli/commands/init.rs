//! Default config file command handler

use crate::config::Config;

pub fn cmd_init() -> anyhow::Result<()> {
    if Config::create_default_if_missing()? {
        println!("✓ Config file created with a fresh secret key. Edit config.toml and run again.");
    } else {
        println!("config.toml already exists, leaving it untouched.");
    }
    Ok(())
}
