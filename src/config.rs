use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Minimum length of the session signing secret, in bytes.
pub const MIN_SECRET_KEY_LEN: usize = 64;

pub const SECRET_KEY_ENV: &str = "WATCHLIST_SECRET_KEY";

pub const DATABASE_URL_ENV: &str = "WATCHLIST_DATABASE_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub security: SecurityConfig,

    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub database_path: String,

    pub log_level: String,

    /// "pretty" or "json"
    pub log_format: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,

    pub max_db_connections: u32,

    pub min_db_connections: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: "sqlite:data/watchlist.db".to_string(),
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            worker_threads: 2,
            max_db_connections: 5,
            min_db_connections: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,

    pub port: u16,

    /// Whether to set the Secure flag on session cookies.
    /// Set to false for local development without HTTPS.
    pub secure_cookies: bool,

    /// Sessions expire after this many minutes without a request.
    pub session_idle_minutes: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 5000,
            secure_cookies: false,
            session_idle_minutes: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Key used to sign the session cookie. Must be at least 64 bytes.
    pub secret_key: String,

    /// Argon2 memory cost in KiB
    pub argon2_memory_cost_kib: u32,

    /// Argon2 time cost (iterations)
    pub argon2_time_cost: u32,

    pub argon2_parallelism: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            argon2_memory_cost_kib: 8192,
            argon2_time_cost: 3,
            argon2_parallelism: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: true,
        }
    }
}

impl Config {
    /// Loads the first config file found, then applies environment overrides.
    pub fn load() -> Result<Self> {
        // A missing .env file is the normal case.
        let _ = dotenvy::dotenv();

        let mut config = Self::config_paths()
            .into_iter()
            .find(|path| path.exists())
            .map_or_else(
                || {
                    info!("No config file found, using defaults");
                    Ok(Self::default())
                },
                |path| {
                    info!("Loading config from: {}", path.display());
                    Self::load_from_path(&path)
                },
            )?;

        config.apply_env_overrides();
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(secret) = std::env::var(SECRET_KEY_ENV)
            && !secret.is_empty()
        {
            self.security.secret_key = secret;
        }

        if let Ok(url) = std::env::var(DATABASE_URL_ENV)
            && !url.is_empty()
        {
            self.general.database_path = url;
        }
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("watchlist").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".watchlist").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    /// Writes a default config with a freshly generated secret key.
    /// Returns `false` when a config file already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            return Ok(false);
        }

        let mut config = Self::default();
        config.security.secret_key = generate_secret_key();
        config.save_to_path(&path)?;
        info!("Created default config file: {}", path.display());
        Ok(true)
    }

    pub fn validate(&self) -> Result<()> {
        if self.general.database_path.trim().is_empty() {
            anyhow::bail!("general.database_path cannot be empty");
        }

        if self.general.min_db_connections > self.general.max_db_connections {
            anyhow::bail!("general.min_db_connections cannot exceed general.max_db_connections");
        }

        if self.security.secret_key.len() < MIN_SECRET_KEY_LEN {
            anyhow::bail!(
                "security.secret_key must be at least {MIN_SECRET_KEY_LEN} bytes \
                 (set it in config.toml or via {SECRET_KEY_ENV})"
            );
        }

        if self.server.session_idle_minutes <= 0 {
            anyhow::bail!("server.session_idle_minutes must be > 0");
        }

        Ok(())
    }
}

/// Generate a random 128 character hex string.
#[must_use]
pub fn generate_secret_key() -> String {
    use rand::Rng;

    let mut rng = rand::rng();
    let bytes: [u8; 64] = rng.random();

    bytes.iter().fold(String::with_capacity(128), |mut acc, b| {
        use std::fmt::Write;
        let _ = write!(acc, "{b:02x}");
        acc
    })
}
