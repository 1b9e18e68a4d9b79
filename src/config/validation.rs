//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::ServiceConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid bind address {0:?}")]
    BindAddress(String),
    #[error("api path {0:?} must start with '/' and not be the root")]
    ApiPath(String),
    #[error("request timeout must be greater than zero")]
    RequestTimeout,
    #[error("max body size must be greater than zero")]
    BodyLimit,
    #[error("invalid metrics address {0:?}")]
    MetricsAddress(String),
}

pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    let path = &config.api.path;
    if !path.starts_with('/') || path == "/" {
        errors.push(ValidationError::ApiPath(path.clone()));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::RequestTimeout);
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::BodyLimit);
    }

    let obs = &config.observability;
    if obs.metrics_enabled && obs.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::MetricsAddress(obs.metrics_address.clone()));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ServiceConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "nowhere".into();
        config.api.path = "api".into();
        config.timeouts.request_secs = 0;
        config.limits.max_body_bytes = 0;
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = "bad".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::RequestTimeout));
        assert!(errors.contains(&ValidationError::ApiPath("api".into())));
    }

    #[test]
    fn test_root_api_path_rejected() {
        let mut config = ServiceConfig::default();
        config.api.path = "/".into();
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::ApiPath("/".into())])
        );
    }

    #[test]
    fn test_metrics_address_ignored_when_disabled() {
        let mut config = ServiceConfig::default();
        config.observability.metrics_address = "bad".into();
        assert!(validate_config(&config).is_ok());
    }
}
