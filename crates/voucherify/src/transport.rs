//! HTTP Transport trait with a default implementation
use std::fmt::Debug;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::{ApiVersion, ClientConfig, LogLevel};
use crate::error::Error;
use crate::filter::Filter;

const HEADER_APP_ID: &str = "X-App-Id";
const HEADER_APP_TOKEN: &str = "X-App-Token";
const HEADER_CHANNEL: &str = "X-Voucherify-Channel";
const HEADER_API_VERSION: &str = "X-Voucherify-API-Version";
const CHANNEL: &str = "Rust-SDK";

/// HTTP method of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl Method {
    /// Method name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether repeating the request has no additional effect
    pub fn is_idempotent(&self) -> bool {
        !matches!(self, Self::Post)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Request as handed to a [`Transport`]
///
/// Path segments are raw values; the transport percent encodes them.
#[derive(Debug, Clone, PartialEq)]
pub struct WireRequest {
    /// HTTP method
    pub method: Method,
    /// Path segments below the base url
    pub segments: Vec<String>,
    /// Query pairs, in emission order
    pub query: Vec<(String, String)>,
    /// JSON body
    pub body: Option<Value>,
}

impl WireRequest {
    /// Request without query or body
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Attach a JSON body
    pub fn json<B>(mut self, body: &B) -> Result<Self, Error>
    where
        B: Serialize + ?Sized,
    {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Append the pairs of a filter
    pub fn with_filter<F>(mut self, filter: &F) -> Result<Self, Error>
    where
        F: Filter + ?Sized,
    {
        self.query.extend(filter.query_pairs()?);
        Ok(self)
    }

    /// Append one query pair
    pub fn with_query_pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Path below the base url, for logging
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// Status and body of a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply {
    /// HTTP status code
    pub status: u16,
    /// Raw body
    pub body: String,
}

impl RawReply {
    /// Status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Expected HTTP Transport
///
/// Performs exactly one request per call. Failing to reach the server is an
/// `Err`; any HTTP status, including errors, is an `Ok` reply.
#[async_trait::async_trait]
pub trait Transport: Send + Sync + Debug {
    /// Send a request
    async fn send(&self, request: WireRequest) -> Result<RawReply, Error>;
}

/// reqwest based transport
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    app_id: String,
    secret_key: String,
    api_version: Option<ApiVersion>,
    log_level: LogLevel,
}

impl Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP transport to {}", self.base_url)
    }
}

impl HttpTransport {
    /// Transport built from a client configuration
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        Self::with_client(builder.build()?, config)
    }

    /// Transport that uses an existing reqwest client
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            client,
            base_url: config.base_url()?,
            app_id: config.app_id.clone(),
            secret_key: config.client_secret_key.clone(),
            api_version: config.api_version,
            log_level: config.log_level.unwrap_or_default(),
        })
    }

    /// Base url of every request
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, request: &WireRequest) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(request.segments.iter());

        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }

        Ok(url)
    }

    fn log_request(&self, request: &WireRequest, url: &Url) {
        if self.log_level >= LogLevel::Basic {
            tracing::info!("--> {} {}", request.method.as_str(), url);
        }
        if self.log_level >= LogLevel::Headers {
            tracing::info!("{}: {}", HEADER_APP_ID, self.app_id);
            tracing::info!("{}: [REDACTED]", HEADER_APP_TOKEN);
            tracing::info!("{}: {}", HEADER_CHANNEL, CHANNEL);
            if let Some(version) = self.api_version {
                tracing::info!("{}: {}", HEADER_API_VERSION, version);
            }
        }
        if self.log_level >= LogLevel::Body {
            if let Some(body) = &request.body {
                tracing::info!("{}", body);
            }
        }
    }

    fn log_reply(&self, reply: &RawReply, url: &Url) {
        if self.log_level >= LogLevel::Basic {
            tracing::info!("<-- {} {}", reply.status, url);
        }
        if self.log_level >= LogLevel::Body {
            tracing::info!("{}", reply.body);
        }
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: WireRequest) -> Result<RawReply, Error> {
        let url = self.url_for(&request)?;
        self.log_request(&request, &url);

        let mut builder = self
            .client
            .request(request.method.into(), url.clone())
            .header(HEADER_APP_ID, &self.app_id)
            .header(HEADER_APP_TOKEN, &self.secret_key)
            .header(HEADER_CHANNEL, CHANNEL);

        if let Some(version) = self.api_version {
            builder = builder.header(HEADER_API_VERSION, version.as_str());
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|err| Error::Body {
            status,
            reason: err.to_string(),
        })?;

        let reply = RawReply { status, body };
        self.log_reply(&reply, &url);
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(endpoint: &str) -> HttpTransport {
        let config = ClientConfig::new("app", "secret")
            .with_endpoint(endpoint)
            .secure(false);
        HttpTransport::new(&config).expect("valid config")
    }

    #[test]
    fn test_method_idempotency() {
        assert!(Method::Get.is_idempotent());
        assert!(Method::Put.is_idempotent());
        assert!(Method::Delete.is_idempotent());
        assert!(!Method::Post.is_idempotent());
    }

    #[test]
    fn test_url_for_encodes_segments() {
        let transport = transport("localhost:8080/v1");
        let request = WireRequest::new(Method::Get, ["vouchers", "SUMMER 10/A"]);
        let url = transport.url_for(&request).expect("valid url");
        assert_eq!(url.as_str(), "http://localhost:8080/v1/vouchers/SUMMER%2010%2FA");
    }

    #[test]
    fn test_url_for_keeps_query_order() {
        let transport = transport("localhost:8080");
        let request = WireRequest::new(Method::Get, ["vouchers"])
            .with_query_pair("limit", "10")
            .with_query_pair("campaign", "some campaign");
        let url = transport.url_for(&request).expect("valid url");
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/vouchers?limit=10&campaign=some+campaign"
        );
    }

    #[test]
    fn test_url_for_without_query() {
        let transport = transport("localhost:8080");
        let request = WireRequest::new(Method::Post, ["vouchers", "CODE", "enable"]);
        let url = transport.url_for(&request).expect("valid url");
        assert_eq!(url.query(), None);
        assert_eq!(url.path(), "/vouchers/CODE/enable");
    }

    #[test]
    fn test_wire_request_path() {
        let request = WireRequest::new(Method::Get, ["customers", "cust_1"]);
        assert_eq!(request.path(), "/customers/cust_1");
    }

    #[test]
    fn test_reply_success_range() {
        let ok = RawReply {
            status: 204,
            body: String::new(),
        };
        let err = RawReply {
            status: 404,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!err.is_success());
    }
}
