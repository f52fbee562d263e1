use std::path::PathBuf;

use crate::errors::CostscopeError;

pub const DEFAULT_DATA_PATH: &str = "/app/data";
pub const DEFAULT_PORT: u16 = 8081;

/// Server configuration, resolved once at startup and passed into the API
/// constructor. Nothing reads the environment after this point.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Root directory of the report file tree.
    pub data_path: PathBuf,
    /// Listen address.
    pub host: String,
    /// Listen port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `DATA_PATH` and `PORT` from the environment, falling back to the
    /// defaults. An unparseable `PORT` is a configuration error.
    pub fn from_env() -> Result<Self, CostscopeError> {
        let mut config = Self::default();
        if let Ok(data_path) = std::env::var("DATA_PATH") {
            if !data_path.is_empty() {
                config.data_path = PathBuf::from(data_path);
            }
        }
        if let Ok(port) = std::env::var("PORT") {
            config.port = port
                .parse()
                .map_err(|_| CostscopeError::Config(format!("Invalid PORT value: {}", port)))?;
        }
        Ok(config)
    }
}
