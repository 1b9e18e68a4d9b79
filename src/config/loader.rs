//! Configuration loading from disk and environment.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
    #[error("Invalid PORT value {0:?}")]
    Port(String),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ServiceConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Replace the port of the bind address, keeping its host.
///
/// Used for the `PORT` environment variable.
pub fn apply_port_override(config: &mut ServiceConfig, port: &str) -> Result<(), ConfigError> {
    let port: u16 = port
        .trim()
        .parse()
        .map_err(|_| ConfigError::Port(port.to_string()))?;

    let mut addr: SocketAddr = config
        .listener
        .bind_address
        .parse()
        .map_err(|_| {
            ConfigError::Validation(vec![ValidationError::BindAddress(
                config.listener.bind_address.clone(),
            )])
        })?;
    addr.set_port(port);
    config.listener.bind_address = addr.to_string();
    Ok(())
}
