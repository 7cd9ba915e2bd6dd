//! Controller connection settings.
//!
//! Settings resolve flag > environment > documented default. Credentials
//! have no default: the controller ships with `admin`/`admin` out of the
//! box, but this client never assumes that.

use crate::error::ConfigError;
use std::env;
use std::time::Duration;

/// Default northbound base URL of the subnet service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/controller/nb/v2/subnetservice/default/";

/// Default request timeout in seconds, applied to every exchange.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_URL: &str = "CONTROLLER_URL";
pub const ENV_USER: &str = "CONTROLLER_USER";
pub const ENV_PASSWORD: &str = "CONTROLLER_PASSWORD";
pub const ENV_TIMEOUT_SECS: &str = "CONTROLLER_TIMEOUT_SECS";

/// Connection settings for the controller's subnet service.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Base URL prefix of the subnet service.
    pub base_url: String,
    /// Basic-auth username.
    pub username: String,
    /// Basic-auth password.
    pub password: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// Optional overrides layered on top of the environment, typically from
/// command-line flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ControllerConfig {
    /// Build a config with the default base URL and timeout.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        ControllerConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: username.into(),
            password: password.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read settings from the environment.
    ///
    /// `CONTROLLER_URL` and `CONTROLLER_TIMEOUT_SECS` fall back to the
    /// documented defaults; `CONTROLLER_USER` and `CONTROLLER_PASSWORD`
    /// are required.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(ConfigOverrides::default())
    }

    /// Read settings from the environment with explicit overrides taking
    /// precedence.
    pub fn from_env_with(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let base_url = overrides
            .base_url
            .or_else(|| env::var(ENV_URL).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let username = overrides
            .username
            .or_else(|| env::var(ENV_USER).ok())
            .ok_or(ConfigError::MissingVar(ENV_USER))?;

        let password = overrides
            .password
            .or_else(|| env::var(ENV_PASSWORD).ok())
            .ok_or(ConfigError::MissingVar(ENV_PASSWORD))?;

        let timeout_secs = match overrides.timeout_secs {
            Some(secs) => secs,
            None => match env::var(ENV_TIMEOUT_SECS) {
                Ok(raw) => raw.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                    var: ENV_TIMEOUT_SECS,
                    value: raw.clone(),
                })?,
                Err(_) => DEFAULT_TIMEOUT_SECS,
            },
        };

        Ok(ControllerConfig {
            base_url,
            username,
            password,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_documented_defaults() {
        let config = ControllerConfig::new("admin", "admin");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ControllerConfig::new("admin", "admin")
            .with_base_url("http://controller:8080/nb/")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url, "http://controller:8080/nb/");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_overrides_take_precedence() {
        // All fields supplied as overrides, so no environment is needed
        let overrides = ConfigOverrides {
            base_url: Some("http://example:8080/".to_string()),
            username: Some("operator".to_string()),
            password: Some("secret".to_string()),
            timeout_secs: Some(7),
        };
        let config = ControllerConfig::from_env_with(overrides).expect("Error building config");
        assert_eq!(config.base_url, "http://example:8080/");
        assert_eq!(config.username, "operator");
        assert_eq!(config.password, "secret");
        assert_eq!(config.timeout, Duration::from_secs(7));
    }

    #[test]
    fn test_missing_credentials_is_an_error() {
        env::remove_var(ENV_USER);
        env::remove_var(ENV_PASSWORD);
        let err = ControllerConfig::from_env_with(ConfigOverrides {
            base_url: Some("http://example:8080/".to_string()),
            ..Default::default()
        })
        .expect_err("Config should require credentials");
        assert!(matches!(err, ConfigError::MissingVar(var) if var == ENV_USER));
    }
}
