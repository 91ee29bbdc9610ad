//! Operation core shared by all resources

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::config::ApiVersion;
use crate::decoder::{self, ListItem, Listing};
use crate::dispatch::{Call, Executor};
use crate::error::{CallResult, Error, ErrorResponse};
use crate::operation::Operation;
use crate::transport::{RawReply, Transport, WireRequest};

/// Sends requests and turns replies into typed results
#[derive(Debug)]
pub(crate) struct Core {
    transport: Arc<dyn Transport>,
    api_version: Option<ApiVersion>,
}

impl Core {
    pub(crate) fn new(transport: Arc<dyn Transport>, api_version: Option<ApiVersion>) -> Self {
        Self {
            transport,
            api_version,
        }
    }

    #[instrument(skip_all, fields(operation = %operation))]
    async fn exchange(&self, operation: Operation, request: WireRequest) -> CallResult<RawReply> {
        tracing::debug!("{} {}", request.method.as_str(), request.path());
        let reply = self.transport.send(request).await?;

        if reply.is_success() {
            return Ok(reply);
        }

        let body = ErrorResponse::from_json(&reply.body).ok();
        let message = match &body {
            Some(body) => body.message.clone(),
            None if !reply.body.trim().is_empty() => reply.body.clone(),
            None => format!("HTTP status {}", reply.status),
        };
        tracing::debug!("{} failed with status {}: {}", operation, reply.status, message);

        Err(Error::Api {
            status: reply.status,
            body,
            message,
        })
    }

    /// Singular endpoint
    pub(crate) async fn object<T>(&self, operation: Operation, request: WireRequest) -> CallResult<T>
    where
        T: DeserializeOwned,
    {
        let reply = self.exchange(operation, request).await?;
        decoder::decode_object(&reply.body)
            .map_err(|err| decode_failure(operation, reply.status, err))
    }

    /// Versioned list endpoint
    pub(crate) async fn list<T>(
        &self,
        operation: Operation,
        request: WireRequest,
    ) -> CallResult<Listing<T>>
    where
        T: ListItem,
    {
        let reply = self.exchange(operation, request).await?;
        decoder::decode_list(&reply.body, self.api_version)
            .map_err(|err| decode_failure(operation, reply.status, err))
    }

    /// Endpoint whose body is ignored
    pub(crate) async fn empty(&self, operation: Operation, request: WireRequest) -> CallResult<()> {
        self.exchange(operation, request).await?;
        Ok(())
    }
}

fn decode_failure(operation: Operation, status: u16, err: serde_json::Error) -> Error {
    tracing::warn!("Could not decode {} response: {}", operation, err);
    Error::Decode {
        status,
        reason: err.to_string(),
    }
}

/// What a resource needs to build calls
#[derive(Debug, Clone)]
pub(crate) struct Context {
    core: Arc<Core>,
    executor: Executor,
}

impl Context {
    pub(crate) fn new(core: Core, executor: Executor) -> Self {
        Self {
            core: Arc::new(core),
            executor,
        }
    }

    /// Call decoding a single object
    ///
    /// `build` runs once per invocation.
    pub(crate) fn object<T, B>(&self, operation: Operation, build: B) -> Call<T>
    where
        T: DeserializeOwned + Send + 'static,
        B: Fn() -> CallResult<WireRequest> + Send + Sync + 'static,
    {
        let core = Arc::clone(&self.core);
        Call::new(operation, self.executor.clone(), move || {
            let core = Arc::clone(&core);
            let request = build();
            async move { core.object(operation, request?).await }
        })
    }

    /// Call decoding a versioned list
    pub(crate) fn list<T, B>(&self, operation: Operation, build: B) -> Call<Listing<T>>
    where
        T: ListItem + Send + 'static,
        B: Fn() -> CallResult<WireRequest> + Send + Sync + 'static,
    {
        let core = Arc::clone(&self.core);
        Call::new(operation, self.executor.clone(), move || {
            let core = Arc::clone(&core);
            let request = build();
            async move { core.list(operation, request?).await }
        })
    }

    /// Call with no output
    pub(crate) fn empty<B>(&self, operation: Operation, build: B) -> Call<()>
    where
        B: Fn() -> CallResult<WireRequest> + Send + Sync + 'static,
    {
        let core = Arc::clone(&self.core);
        Call::new(operation, self.executor.clone(), move || {
            let core = Arc::clone(&core);
            let request = build();
            async move { core.empty(operation, request?).await }
        })
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::operation::Resource;
    use crate::transport::Method;

    const GET: Operation = Operation::new(Resource::Customers, "get", Method::Get);

    #[derive(Debug)]
    struct Fixed(RawReply);

    #[async_trait::async_trait]
    impl Transport for Fixed {
        async fn send(&self, _request: WireRequest) -> Result<RawReply, Error> {
            Ok(self.0.clone())
        }
    }

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
    }

    fn replying(status: u16, body: &str) -> Core {
        Core::new(
            Arc::new(Fixed(RawReply {
                status,
                body: body.to_string(),
            })),
            None,
        )
    }

    fn run<T>(future: impl std::future::Future<Output = T>) -> T {
        futures::executor::block_on(future)
    }

    #[test]
    fn test_success_decodes_object() {
        let core = replying(200, r#"{"name": "Bob"}"#);
        let named: Named = run(core.object(GET, GET.request(["customers", "1"]))).expect("ok");
        assert_eq!(named.name, "Bob");
    }

    #[test]
    fn test_error_body_is_decoded() {
        let core = replying(
            404,
            r#"{"code": 404, "key": "not_found", "message": "Resource not found"}"#,
        );
        let err = run(core.object::<Named>(GET, GET.request(["customers", "1"])))
            .expect_err("404 is an error");
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.body().map(|b| b.key.as_deref()), Some(Some("not_found")));
        assert_eq!(err.to_string(), "API error (404): Resource not found");
    }

    #[test]
    fn test_unstructured_error_body() {
        let core = replying(502, "Bad Gateway");
        let err = run(core.empty(GET, GET.request(["customers"]))).expect_err("502 is an error");
        assert!(err.body().is_none());
        assert_eq!(err.to_string(), "API error (502): Bad Gateway");

        let core = replying(500, "");
        let err = run(core.empty(GET, GET.request(["customers"]))).expect_err("500 is an error");
        assert_eq!(err.to_string(), "API error (500): HTTP status 500");
    }

    #[test]
    fn test_decode_failure_keeps_status() {
        let core = replying(200, "[]");
        let err = run(core.object::<Named>(GET, GET.request(["customers", "1"])))
            .expect_err("array is not an object");
        assert!(matches!(err, Error::Decode { status: 200, .. }));
    }

    #[test]
    fn test_empty_ignores_body() {
        let core = replying(204, "");
        run(core.empty(GET, GET.request(["customers", "1"]))).expect("no content");
    }
}
