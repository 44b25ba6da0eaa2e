use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Runtime configuration, resolved once at startup.
///
/// Sources, later wins:
/// 1. the defaults below
/// 2. environment variables (`DATABASE_URL`, `LISTEN_ADDR`, `LOGLEVEL`),
///    optionally loaded from `.env` by `main`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:starlog.db".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&["DATABASE_URL", "LISTEN_ADDR", "LOGLEVEL"]))
            .extract()
    }
}

pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::load().expect("invalid configuration"));
