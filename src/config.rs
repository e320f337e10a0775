use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::errors::ConfigError;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Read `PORT` and `HOST` from the environment, after loading `.env` if present
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;

        tracing::info!("Configuration loaded: {}", config.bind_addr);
        Ok(config)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                reason: format!("'{raw}': {e}"),
            })?,
            None => DEFAULT_PORT,
        };

        let host: IpAddr = match lookup("HOST") {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
                key: "HOST".to_string(),
                reason: format!("'{raw}': {e}"),
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
        })
    }
}
