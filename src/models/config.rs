//! Configuration model loaded from external sources.

use config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings shared by the HTTP server and the data loader.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// JSON array consumed by the `load_data` binary.
    pub data_file: String,
}

impl ServerConfig {
    /// Loads `config/default.yaml`, the optional `config/{app_env}.yaml`
    /// profile and `APP_*` environment overrides, in that order.
    pub fn load(app_env: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize::<ServerConfig>()
    }
}
