//! Call dispatch
//!
//! Every resource method returns a [`Call`], a lazy and cloneable handle on one
//! operation invocation. The same handle can be run in three ways:
//!
//! - [`Call::execute`] blocks the calling thread until the result is ready
//! - [`Call::execute_async`] runs on the worker executor and reports to a
//!   callback
//! - [`Call::stream`] returns a cold [`Single`] stream
//!
//! Each run performs exactly one request. Building the handle performs none.

mod executor;
mod stream;

use std::fmt;
use std::future::Future;
use std::sync::Arc;

pub use executor::Executor;
use futures::future::BoxFuture;
use futures::FutureExt;
pub use stream::Single;

use crate::error::{CallResult, Error};
use crate::operation::Operation;

pub(crate) type Invocation<T> = Arc<dyn Fn() -> BoxFuture<'static, CallResult<T>> + Send + Sync>;

/// Lazy handle on one operation invocation
pub struct Call<T> {
    operation: Operation,
    executor: Executor,
    invoke: Invocation<T>,
}

impl<T> Clone for Call<T> {
    fn clone(&self) -> Self {
        Self {
            operation: self.operation,
            executor: self.executor.clone(),
            invoke: Arc::clone(&self.invoke),
        }
    }
}

impl<T> fmt::Debug for Call<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Call")
            .field("operation", &self.operation)
            .field("executor", &self.executor)
            .finish()
    }
}

impl<T> Call<T>
where
    T: Send + 'static,
{
    pub(crate) fn new<F, Fut>(operation: Operation, executor: Executor, invoke: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CallResult<T>> + Send + 'static,
    {
        Self {
            operation,
            executor,
            invoke: Arc::new(move || invoke().boxed()),
        }
    }

    /// Operation this call runs
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Run the operation and wait for its result
    ///
    /// Blocks the calling thread. From inside a multi-thread tokio runtime the
    /// worker thread is handed over for the duration of the call. From inside
    /// a current-thread runtime the operation runs on the executor's threads
    /// while the caller waits, which fails with [`Error::Worker`] when the
    /// executor is itself a current-thread runtime. Async code should use
    /// [`Call::stream`] instead.
    pub fn execute(&self) -> CallResult<T> {
        tracing::debug!("Executing {}", self.operation);
        self.executor.block_on((self.invoke)())
    }

    /// Run the operation on the worker executor
    ///
    /// Returns immediately. `callback` is invoked exactly once with the
    /// outcome, normally on a worker thread. A panic while running the
    /// operation, or an executor that shuts down before it completes, is
    /// reported as [`Error::Worker`].
    pub fn execute_async<C>(&self, callback: C)
    where
        C: FnOnce(CallResult<T>) + Send + 'static,
    {
        tracing::debug!("Dispatching {}", self.operation);
        let operation = self.operation;
        let callback = Callback::new(operation, callback);
        let task = self.executor.spawn((self.invoke)());

        self.executor.spawn(async move {
            let result = match task.await {
                Ok(result) => result,
                Err(err) => {
                    tracing::error!("Operation {} did not complete: {}", operation, err);
                    Err(err.into())
                }
            };
            callback.fire(result);
        });
    }

    /// Cold single-element stream of the outcome
    ///
    /// Nothing is sent until the stream is first polled. Every call returns a
    /// new stream that performs its own request.
    pub fn stream(&self) -> Single<T> {
        Single::new(self.operation, self.executor.clone(), Arc::clone(&self.invoke))
    }
}

/// Callback that is invoked exactly once
///
/// If the task holding it is dropped before completing, e.g. because its
/// runtime shut down, the callback receives [`Error::Worker`].
struct Callback<T> {
    operation: Operation,
    callback: Option<Box<dyn FnOnce(CallResult<T>) + Send>>,
}

impl<T> Callback<T> {
    fn new<C>(operation: Operation, callback: C) -> Self
    where
        C: FnOnce(CallResult<T>) + Send + 'static,
    {
        Self {
            operation,
            callback: Some(Box::new(callback)),
        }
    }

    fn fire(mut self, result: CallResult<T>) {
        if let Some(callback) = self.callback.take() {
            callback(result);
        }
    }
}

impl<T> Drop for Callback<T> {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            tracing::error!("Operation {} was dropped by its executor", self.operation);
            callback(Err(Error::Worker("operation was cancelled".to_string())));
        }
    }
}
