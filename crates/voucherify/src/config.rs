//! Client configuration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::decoder::ListShape;
use crate::error::Error;

/// Default API endpoint, without scheme
pub const DEFAULT_ENDPOINT: &str = "api.voucherify.io/v1";

/// Voucherify API version pinned by the client
///
/// Sent as `X-Voucherify-API-Version` and used to pick the shape of list
/// responses. Without a pinned version the API answers lists as bare arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiVersion {
    /// v2017-04-05
    #[serde(rename = "v2017-04-05")]
    V2017_04_05,
    /// v2018-08-01
    #[serde(rename = "v2018-08-01")]
    V2018_08_01,
}

impl ApiVersion {
    /// Header value of the version
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V2017_04_05 => "v2017-04-05",
            Self::V2018_08_01 => "v2018-08-01",
        }
    }

    /// Shape of list payloads under this version
    pub fn list_shape(&self) -> ListShape {
        match self {
            Self::V2017_04_05 | Self::V2018_08_01 => ListShape::Envelope,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "v2017-04-05" => Ok(Self::V2017_04_05),
            "v2018-08-01" => Ok(Self::V2018_08_01),
            other => Err(Error::Config(format!("Unknown API version: {other}"))),
        }
    }
}

/// How much the HTTP transport logs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Nothing
    #[default]
    None,
    /// Method, url and status
    Basic,
    /// Basic plus request headers
    Headers,
    /// Headers plus request and response bodies
    Body,
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "basic" => Ok(Self::Basic),
            "headers" => Ok(Self::Headers),
            "body" => Ok(Self::Body),
            other => Err(Error::Config(format!("Unknown log level: {other}"))),
        }
    }
}

fn default_secure() -> bool {
    true
}

/// Voucherify client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Secret key, sent as `X-App-Token`
    #[serde(default)]
    pub client_secret_key: String,
    /// Application id, sent as `X-App-Id`
    #[serde(default)]
    pub app_id: String,
    /// Host and base path without scheme, defaults to [`DEFAULT_ENDPOINT`]
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Use https
    #[serde(default = "default_secure")]
    pub secure: bool,
    /// Pinned API version
    #[serde(default)]
    pub api_version: Option<ApiVersion>,
    /// Transport log level
    #[serde(default)]
    pub log_level: Option<LogLevel>,
    /// Per request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            client_secret_key: String::new(),
            app_id: String::new(),
            endpoint: None,
            secure: true,
            api_version: None,
            log_level: None,
            timeout_secs: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_secret_key", &"[REDACTED]")
            .field("app_id", &self.app_id)
            .field("endpoint", &self.endpoint)
            .field("secure", &self.secure)
            .field("api_version", &self.api_version)
            .field("log_level", &self.log_level)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    /// Config with credentials and defaults for everything else
    pub fn new(app_id: impl Into<String>, client_secret_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            client_secret_key: client_secret_key.into(),
            ..Default::default()
        }
    }

    /// Set endpoint (host and base path, no scheme)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Pin API version
    pub fn with_api_version(mut self, api_version: ApiVersion) -> Self {
        self.api_version = Some(api_version);
        self
    }

    /// Set transport log level
    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = Some(log_level);
        self
    }

    /// Set request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Choose between https and http
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Check required fields
    pub fn validate(&self) -> Result<(), Error> {
        if self.client_secret_key.trim().is_empty() {
            return Err(Error::Config("client secret key is required".to_string()));
        }
        if self.app_id.trim().is_empty() {
            return Err(Error::Config("app id is required".to_string()));
        }
        if let Some(endpoint) = &self.endpoint {
            if endpoint.trim().is_empty() {
                return Err(Error::Config("endpoint must not be empty".to_string()));
            }
            if endpoint.contains("://") {
                return Err(Error::Config(format!(
                    "endpoint must not include a scheme, use `secure` instead: {endpoint}"
                )));
            }
        }
        Ok(())
    }

    /// Base url of every request
    pub fn base_url(&self) -> Result<url::Url, Error> {
        let scheme = if self.secure { "https" } else { "http" };
        let endpoint = self
            .endpoint
            .as_deref()
            .unwrap_or(DEFAULT_ENDPOINT)
            .trim_end_matches('/');
        Ok(url::Url::parse(&format!("{scheme}://{endpoint}"))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = ClientConfig::new("app", "secret");
        let url = config.base_url().expect("valid url");
        assert_eq!(url.as_str(), "https://api.voucherify.io/v1");
    }

    #[test]
    fn test_insecure_custom_endpoint() {
        let config = ClientConfig::new("app", "secret")
            .with_endpoint("127.0.0.1:1234/")
            .secure(false);
        let url = config.base_url().expect("valid url");
        assert_eq!(url.as_str(), "http://127.0.0.1:1234/");
    }

    #[test]
    fn test_validate_requires_credentials() {
        assert!(matches!(
            ClientConfig::new("app", "").validate(),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ClientConfig::new(" ", "secret").validate(),
            Err(Error::Config(_))
        ));
        assert!(ClientConfig::new("app", "secret").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_scheme_in_endpoint() {
        let config = ClientConfig::new("app", "secret").with_endpoint("https://api.voucherify.io/v1");
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ClientConfig::new("app", "super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_api_version_strings() {
        assert_eq!(ApiVersion::V2017_04_05.to_string(), "v2017-04-05");
        assert_eq!(
            "v2018-08-01".parse::<ApiVersion>().expect("known version"),
            ApiVersion::V2018_08_01
        );
        assert!("v1999-01-01".parse::<ApiVersion>().is_err());
        assert_eq!(ApiVersion::V2017_04_05.list_shape(), ListShape::Envelope);
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"app_id": "app", "client_secret_key": "secret", "api_version": "v2017-04-05", "log_level": "basic"}"#,
        )
        .expect("valid config");
        assert!(config.secure);
        assert_eq!(config.endpoint, None);
        assert_eq!(config.api_version, Some(ApiVersion::V2017_04_05));
        assert_eq!(config.log_level, Some(LogLevel::Basic));
    }
}
