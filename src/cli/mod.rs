//! CLI module - Command-line interface for Watchlist
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Watchlist - a personal movie list
#[derive(Parser)]
#[command(name = "watchlist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (default)
    Serve,

    /// Initialize the database.
    Initdb {
        /// Create after drop.
        #[arg(long)]
        drop: bool,
    },

    /// Create the site owner, or update its credentials.
    Admin {
        /// The username used to login.
        #[arg(long)]
        username: Option<String>,
        /// The password used to login.
        #[arg(long)]
        password: Option<String>,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
