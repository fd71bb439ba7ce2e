//! Configuration loading and representation.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const HOST_VAR: &str = "COOKBOOK_HOST";
pub const PORT_VAR: &str = "COOKBOOK_PORT";

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid IP address: '{value}'")]
    InvalidHost { var: &'static str, value: String },

    #[error("{var} is not a valid port: '{value}'")]
    InvalidPort { var: &'static str, value: String },
}

/// HTTP server settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Load from `COOKBOOK_HOST` / `COOKBOOK_PORT`, falling back to `0.0.0.0:8080`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(HOST_VAR).filter(|v| !v.trim().is_empty()) {
            config.host = value.trim().parse().map_err(|_| ConfigError::InvalidHost {
                var: HOST_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(PORT_VAR).filter(|v| !v.trim().is_empty()) {
            config.port = value.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value: value.clone(),
            })?;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
