//! Configuration management for the contact form.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is honoured when present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Configuration for the contact form.
#[derive(Debug, Clone)]
pub struct Config {
    /// Form name reported to analytics (default: "contact_form")
    pub form_name: String,

    /// Webhook receiving submissions. When unset the simulated sender is used.
    pub webhook_url: Option<String>,

    /// Bearer token sent with webhook requests
    pub webhook_token: Option<String>,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Delay of the simulated sender in milliseconds (default: 2000)
    pub simulated_send_delay_ms: u64,

    /// How long the confirmation stays visible before the form resets,
    /// in milliseconds (default: 3000)
    pub success_reset_delay_ms: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_FORM_NAME`: Form name for analytics (default: "contact_form")
    /// - `CONTACT_WEBHOOK_URL`: Webhook URL, must start with http:// or https://
    /// - `CONTACT_WEBHOOK_TOKEN`: Bearer token, requires `CONTACT_WEBHOOK_URL`
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `SIMULATED_SEND_DELAY_MS`: Stub sender delay (default: 2000)
    /// - `SUCCESS_RESET_DELAY_MS`: Confirmation display delay (default: 3000)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let form_name = env::var("CONTACT_FORM_NAME").unwrap_or(defaults.form_name);
        if form_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_FORM_NAME".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let webhook_url = Self::non_empty_var("CONTACT_WEBHOOK_URL");
        if let Some(url) = &webhook_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_WEBHOOK_URL".to_string(),
                    reason: "Must start with http:// or https://".to_string(),
                });
            }
        }

        let webhook_token = Self::non_empty_var("CONTACT_WEBHOOK_TOKEN");
        if webhook_token.is_some() && webhook_url.is_none() {
            return Err(ConfigError::MissingVar("CONTACT_WEBHOOK_URL".to_string()));
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", defaults.request_timeout)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let simulated_send_delay_ms =
            Self::parse_env_u64("SIMULATED_SEND_DELAY_MS", defaults.simulated_send_delay_ms)?;
        let success_reset_delay_ms =
            Self::parse_env_u64("SUCCESS_RESET_DELAY_MS", defaults.success_reset_delay_ms)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            form_name,
            webhook_url,
            webhook_token,
            request_timeout,
            simulated_send_delay_ms,
            success_reset_delay_ms,
            log_level,
        })
    }

    /// Delay used by the simulated sender.
    pub fn simulated_send_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_send_delay_ms)
    }

    /// Delay before a successful submission returns the form to idle.
    pub fn success_reset_delay(&self) -> Duration {
        Duration::from_millis(self.success_reset_delay_ms)
    }

    fn non_empty_var(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .filter(|value| !value.trim().is_empty())
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            form_name: "contact_form".to_string(),
            webhook_url: None,
            webhook_token: None,
            request_timeout: 10,
            simulated_send_delay_ms: 2000,
            success_reset_delay_ms: 3000,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: &[&str] = &[
        "CONTACT_FORM_NAME",
        "CONTACT_WEBHOOK_URL",
        "CONTACT_WEBHOOK_TOKEN",
        "REQUEST_TIMEOUT",
        "SIMULATED_SEND_DELAY_MS",
        "SUCCESS_RESET_DELAY_MS",
    ];

    // Clears the variables under test on creation and on drop
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.form_name, "contact_form");
        assert_eq!(config.success_reset_delay(), Duration::from_secs(3));
        assert_eq!(config.simulated_send_delay(), Duration::from_secs(2));
        assert!(config.webhook_url.is_none());
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let _guard = EnvGuard::new();

        let config = Config::from_env().unwrap();
        assert_eq!(config.form_name, "contact_form");
        assert_eq!(config.request_timeout, 10);
        assert_eq!(config.success_reset_delay_ms, 3000);
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_FORM_NAME", "landing_contact");
        guard.set("CONTACT_WEBHOOK_URL", "https://hooks.example.com/contact");
        guard.set("CONTACT_WEBHOOK_TOKEN", "secret");
        guard.set("SUCCESS_RESET_DELAY_MS", "500");

        let config = Config::from_env().unwrap();
        assert_eq!(config.form_name, "landing_contact");
        assert_eq!(
            config.webhook_url.as_deref(),
            Some("https://hooks.example.com/contact")
        );
        assert_eq!(config.webhook_token.as_deref(), Some("secret"));
        assert_eq!(config.success_reset_delay(), Duration::from_millis(500));
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_WEBHOOK_URL", "not-a-url");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_WEBHOOK_URL");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_token_without_url() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_WEBHOOK_TOKEN", "secret");

        match Config::from_env() {
            Err(ConfigError::MissingVar(var)) => assert_eq!(var, "CONTACT_WEBHOOK_URL"),
            other => panic!("Expected MissingVar error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_zero_timeout_rejected() {
        let mut guard = EnvGuard::new();
        guard.set("REQUEST_TIMEOUT", "0");

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_parse_env_u64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_FORM_U64", "42");

        let result = Config::parse_env_u64("TEST_FORM_U64", 10);
        assert_eq!(result.unwrap(), 42);

        let result = Config::parse_env_u64("NONEXISTENT_FORM_VAR", 10);
        assert_eq!(result.unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_u64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("SUCCESS_RESET_DELAY_MS", "soon");

        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref var, .. }) if var == "SUCCESS_RESET_DELAY_MS"
        ));
    }
}
