/// Application settings loaded from `config.toml` and the environment
pub mod app;

/// Database connection and schema initialisation
pub mod database;

pub use app::{AppConfig, load_app_configuration, load_config};
pub use database::{connect, ensure_schema};
