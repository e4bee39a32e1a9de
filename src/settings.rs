//! Service settings.
//!
//! Values come from built-in defaults, an optional `settings.toml` and
//! finally `SPLITBILLS_*` environment variables, e.g.
//! `SPLITBILLS_SERVER__PORT=9000`.
use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub log: Log,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name("settings").required(false))
            .add_source(Environment::with_prefix("SPLITBILLS").separator("__"))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("log.level", "info")
    }
}
