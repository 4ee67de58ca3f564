//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `PORT` (optional): HTTP server port, defaults to 8000
/// - `DATABASE_URL` (optional): SQLite database file, defaults to `sqlite://wina_bwangu.db`
/// - `STATIC_DIR` (optional): directory holding the login page and assets, defaults to `static`
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_port() -> u16 {
    8000
}

fn default_database_url() -> String {
    "sqlite://wina_bwangu.db".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is loaded first if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed (e.g. a non-numeric `PORT`).
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>()
    }

    /// Same as [`Config::from_env`] but reads from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }
}
