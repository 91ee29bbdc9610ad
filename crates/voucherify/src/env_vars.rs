//! Environment variables
//!
//! Overlay of the client configuration from the process environment.

use std::env;

use crate::config::{ApiVersion, ClientConfig, LogLevel};

/// Application id
pub const ENV_APP_ID: &str = "VOUCHERIFY_APP_ID";
/// Secret key
pub const ENV_SECRET_KEY: &str = "VOUCHERIFY_SECRET_KEY";
/// Endpoint, host and base path without scheme
pub const ENV_ENDPOINT: &str = "VOUCHERIFY_ENDPOINT";
/// `true` for https, `false` for http
pub const ENV_SECURE: &str = "VOUCHERIFY_SECURE";
/// Pinned API version, e.g. `v2017-04-05`
pub const ENV_API_VERSION: &str = "VOUCHERIFY_API_VERSION";
/// Transport log level: `none`, `basic`, `headers` or `body`
pub const ENV_LOG_LEVEL: &str = "VOUCHERIFY_LOG_LEVEL";
/// Request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "VOUCHERIFY_TIMEOUT_SECS";

impl ClientConfig {
    /// Override fields with the values found in the environment
    ///
    /// Values that do not parse are logged and ignored.
    pub fn from_env(mut self) -> Self {
        if let Ok(app_id) = env::var(ENV_APP_ID) {
            self.app_id = app_id;
        }

        if let Ok(secret_key) = env::var(ENV_SECRET_KEY) {
            self.client_secret_key = secret_key;
        }

        if let Ok(endpoint) = env::var(ENV_ENDPOINT) {
            self.endpoint = Some(endpoint);
        }

        if let Ok(secure_str) = env::var(ENV_SECURE) {
            match secure_str.parse() {
                Ok(secure) => self.secure = secure,
                Err(_) => tracing::warn!("Invalid {} value: {}", ENV_SECURE, secure_str),
            }
        }

        if let Ok(version_str) = env::var(ENV_API_VERSION) {
            match version_str.parse::<ApiVersion>() {
                Ok(version) => self.api_version = Some(version),
                Err(err) => tracing::warn!("Invalid {}: {}", ENV_API_VERSION, err),
            }
        }

        if let Ok(level_str) = env::var(ENV_LOG_LEVEL) {
            match level_str.parse::<LogLevel>() {
                Ok(level) => self.log_level = Some(level),
                Err(err) => tracing::warn!("Invalid {}: {}", ENV_LOG_LEVEL, err),
            }
        }

        if let Ok(timeout_str) = env::var(ENV_TIMEOUT_SECS) {
            match timeout_str.parse() {
                Ok(timeout) => self.timeout_secs = Some(timeout),
                Err(_) => tracing::warn!("Invalid {} value: {}", ENV_TIMEOUT_SECS, timeout_str),
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Serializes tests that touch the process environment
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ALL: [&str; 7] = [
        ENV_APP_ID,
        ENV_SECRET_KEY,
        ENV_ENDPOINT,
        ENV_SECURE,
        ENV_API_VERSION,
        ENV_LOG_LEVEL,
        ENV_TIMEOUT_SECS,
    ];

    fn with_env<F: FnOnce()>(vars: &[(&str, &str)], test: F) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        for name in ALL {
            env::remove_var(name);
        }
        for (name, value) in vars {
            env::set_var(name, value);
        }
        test();
        for name in ALL {
            env::remove_var(name);
        }
    }

    #[test]
    fn test_env_overrides_every_field() {
        with_env(
            &[
                (ENV_APP_ID, "env-app"),
                (ENV_SECRET_KEY, "env-secret"),
                (ENV_ENDPOINT, "localhost:8080/v1"),
                (ENV_SECURE, "false"),
                (ENV_API_VERSION, "v2017-04-05"),
                (ENV_LOG_LEVEL, "headers"),
                (ENV_TIMEOUT_SECS, "15"),
            ],
            || {
                let config = ClientConfig::new("file-app", "file-secret").from_env();

                assert_eq!(config.app_id, "env-app");
                assert_eq!(config.client_secret_key, "env-secret");
                assert_eq!(config.endpoint.as_deref(), Some("localhost:8080/v1"));
                assert!(!config.secure);
                assert_eq!(config.api_version, Some(ApiVersion::V2017_04_05));
                assert_eq!(config.log_level, Some(LogLevel::Headers));
                assert_eq!(config.timeout_secs, Some(15));
            },
        );
    }

    #[test]
    fn test_unset_env_keeps_config() {
        with_env(&[], || {
            let config = ClientConfig::new("file-app", "file-secret")
                .with_api_version(ApiVersion::V2018_08_01)
                .from_env();

            assert_eq!(config.app_id, "file-app");
            assert_eq!(config.client_secret_key, "file-secret");
            assert!(config.secure);
            assert_eq!(config.api_version, Some(ApiVersion::V2018_08_01));
        });
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        with_env(
            &[
                (ENV_SECURE, "sometimes"),
                (ENV_API_VERSION, "v1999-01-01"),
                (ENV_LOG_LEVEL, "loud"),
                (ENV_TIMEOUT_SECS, "soon"),
            ],
            || {
                let config = ClientConfig::new("file-app", "file-secret")
                    .secure(false)
                    .with_api_version(ApiVersion::V2018_08_01)
                    .with_log_level(LogLevel::Basic)
                    .with_timeout_secs(30)
                    .from_env();

                assert!(!config.secure);
                assert_eq!(config.api_version, Some(ApiVersion::V2018_08_01));
                assert_eq!(config.log_level, Some(LogLevel::Basic));
                assert_eq!(config.timeout_secs, Some(30));
            },
        );
    }
}
