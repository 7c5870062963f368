//! Application configuration loading from config.toml
//!
//! Every setting has a default, so the file is optional. `DATABASE_URL` from the
//! environment (or a `.env` file) takes precedence over the file.

use crate::config::database::{DEFAULT_DATABASE_URL, database_url_from_env};
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Location of the optional configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Settings for the whole application
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// `SeaORM` connection URL of the database file
    pub database_url: String,
    /// Prefix shown in front of money amounts, e.g. "Rs"
    pub currency_label: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            currency_label: "Rs".to_string(),
        }
    }
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns `Error::Config` if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Resolves the configuration used at startup.
///
/// Reads `./config.toml` when present, falls back to defaults otherwise, then applies
/// the `DATABASE_URL` override.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = Path::new(DEFAULT_CONFIG_PATH);
    let mut config = if path.exists() {
        load_config(path)?
    } else {
        info!("No {} found, using default settings.", DEFAULT_CONFIG_PATH);
        AppConfig::default()
    };

    if let Some(url) = database_url_from_env() {
        debug!("DATABASE_URL overrides configured database location.");
        config.database_url = url;
    }

    Ok(config)
}
