use crate::config::types::{Config, EndpointsConfig, HttpConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_http_config(&config.http)?;
    validate_endpoints_config(&config.endpoints)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    Ok(())
}

/// Validates endpoint URLs
fn validate_endpoints_config(config: &EndpointsConfig) -> Result<(), ConfigError> {
    validate_endpoint_url("athlete-base-url", &config.athlete_base_url)?;
    validate_endpoint_url("rankings-url", &config.rankings_url)?;
    validate_endpoint_url("athletes-url", &config.athletes_url)?;
    validate_endpoint_url("statleaders-url", &config.statleaders_url)?;
    Ok(())
}

/// Validates a single endpoint: must parse as an absolute HTTP(S) URL
fn validate_endpoint_url(key: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {}: {}", key, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "{} must use an http or https scheme, got '{}'",
            key,
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::Validation(format!(
            "{} must include a host, got '{}'",
            key, value
        )));
    }

    Ok(())
}
