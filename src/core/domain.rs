use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

// Configuration abstracts config options for the bookshelf service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            host: "localhost".to_string(),
            port: 9000,
            log_level: "info".to_string(),
        }
    }

    // Defaults overlaid with BOOKSHELF_HOST, BOOKSHELF_PORT and BOOKSHELF_LOG_LEVEL.
    pub fn load() -> LibraryResult<Self> {
        let defaults = Configuration::new();
        let config = Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", defaults.port as i64)?
            .set_default("log_level", defaults.log_level)?
            .add_source(Environment::with_prefix("BOOKSHELF"))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
