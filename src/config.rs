use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::QuotesError;

/// Service configuration.
///
/// Loaded once by the binary and handed to each component at construction;
/// nothing reads configuration ad hoc.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub basic: BasicConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicConfig {
    pub listen_addr: String,
    pub db_path: PathBuf,
    pub max_connections: u32,
    pub loglevel: String,
    pub service_name: String,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            db_path: PathBuf::from("quotes.db"),
            max_connections: 5,
            loglevel: "info".to_string(),
            service_name: "ClaudeQuotes API".to_string(),
        }
    }
}

/// Front-end origins allowed to call the API from a browser.
///
/// An entry may contain a single `*`, e.g. `https://*.vercel.app`, which
/// matches any non-empty run of characters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "https://*.vercel.app".to_string(),
            ],
        }
    }
}

impl Config {
    /// Defaults, then `config.toml` (optional), then the environment.
    pub fn load() -> Result<Self, QuotesError> {
        Self::figment().extract().map_err(QuotesError::from)
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("QUOTES_").split("__"))
            // bare DB_PATH is what existing deployments set
            .merge(
                Env::raw()
                    .only(&["DB_PATH"])
                    .map(|_| "basic.db_path".into()),
            )
    }
}
