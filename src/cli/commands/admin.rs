//! Site owner bootstrap command handler

use anyhow::Context;
use inquire::{Password, PasswordDisplayMode, Text};

use crate::config::Config;
use crate::db::Store;
use crate::services::{AdminOutcome, bootstrap};

fn prompt_username() -> anyhow::Result<String> {
    Text::new("Username:")
        .with_help_message("The username used to login.")
        .prompt()
        .context("Failed to read username")
}

/// Asks twice; inquire rejects the entry until both match.
fn prompt_password() -> anyhow::Result<String> {
    Password::new("Password:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_custom_confirmation_message("Repeat for confirmation:")
        .with_custom_confirmation_error_message("The two values do not match.")
        .prompt()
        .context("Failed to read password")
}

pub async fn cmd_admin(
    config: &Config,
    username: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let username = match username {
        Some(u) => u,
        None => prompt_username()?,
    };
    let password = match password {
        Some(p) => p,
        None => prompt_password()?,
    };

    bootstrap::check_admin_credentials(&username, &password)?;

    let store = Store::new(&config.general.database_path).await?;
    store.init_schema(false).await?;
    let existing = store.get_owner().await?;

    println!(
        "{}",
        if existing.is_some() {
            "Updating user..."
        } else {
            "Creating user..."
        }
    );

    let outcome =
        bootstrap::create_or_update_admin(&store, &config.security, &username, &password).await?;
    if outcome == AdminOutcome::Created {
        println!("Seeded the sample catalog.");
    }

    println!("Done.");
    Ok(())
}
