//! Worker executor

use std::future::Future;
use std::sync::mpsc;

use once_cell::sync::OnceCell;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use tokio::task::JoinHandle;

use crate::error::Error;

/// Process wide worker runtime, built on first use
static SHARED_RUNTIME: OnceCell<Runtime> = OnceCell::new();

fn shared_runtime() -> Result<&'static Runtime, Error> {
    SHARED_RUNTIME.get_or_try_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("voucherify-worker")
            .build()
            .map_err(|err| Error::Worker(format!("failed to build worker runtime: {err}")))
    })
}

/// Where operations run
///
/// Either the process wide `voucherify-worker` runtime or a runtime owned by
/// the caller.
#[derive(Debug, Clone)]
pub struct Executor {
    handle: Handle,
}

impl Executor {
    /// Executor backed by the shared worker runtime
    pub fn shared() -> Result<Self, Error> {
        Ok(Self {
            handle: shared_runtime()?.handle().clone(),
        })
    }

    /// Executor backed by a caller owned runtime
    pub fn from_handle(handle: Handle) -> Self {
        Self { handle }
    }

    /// Runtime handle
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Spawn a future on a worker
    pub fn spawn<F>(&self, future: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.handle.spawn(future)
    }

    /// Drive a future to completion, blocking the calling thread
    ///
    /// Inside a multi-thread runtime the worker is handed over with
    /// `block_in_place`. Inside a current-thread runtime the future is spawned
    /// on this executor and the caller waits for its result, which needs an
    /// executor with threads of its own; a current-thread executor is
    /// reported as [`Error::Worker`].
    pub fn block_on<F, T>(&self, future: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, Error>> + Send + 'static,
        T: Send + 'static,
    {
        match Handle::try_current() {
            Ok(current) => match current.runtime_flavor() {
                RuntimeFlavor::MultiThread => {
                    tokio::task::block_in_place(|| self.handle.block_on(future))
                }
                _ => self.wait_for(future),
            },
            Err(_) => self.handle.block_on(future),
        }
    }

    fn wait_for<F, T>(&self, future: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, Error>> + Send + 'static,
        T: Send + 'static,
    {
        if self.handle.runtime_flavor() != RuntimeFlavor::MultiThread {
            return Err(Error::Worker(
                "blocking call needs a multi-thread executor when made from a current-thread runtime"
                    .to_string(),
            ));
        }

        let (sender, receiver) = mpsc::channel();
        self.spawn(async move {
            let _ = sender.send(future.await);
        });

        receiver
            .recv()
            .map_err(|_| Error::Worker("operation was cancelled".to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_runtime_is_reused() {
        let first = shared_runtime().expect("runtime");
        let second = shared_runtime().expect("runtime");
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_block_on_outside_runtime() {
        let executor = Executor::shared().expect("runtime");
        let value = executor.block_on(async { Ok::<_, Error>(21 * 2) });
        assert_eq!(value.expect("value"), 42);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_block_on_inside_current_thread_runtime() {
        let executor = Executor::shared().expect("runtime");
        let value = executor.block_on(async { Ok::<_, Error>(7) });
        assert_eq!(value.expect("value"), 7);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_block_on_current_thread_executor_is_rejected() {
        let executor = Executor::from_handle(Handle::current());
        let result = executor.block_on(async { Ok::<_, Error>(()) });
        assert!(matches!(result, Err(Error::Worker(_))));
    }

    #[test]
    fn test_spawn_runs_on_worker_thread() {
        let executor = Executor::shared().expect("runtime");
        let name = executor
            .block_on(async {
                let handle = Executor::shared()?.spawn(async {
                    std::thread::current().name().map(ToOwned::to_owned)
                });
                Ok(handle.await?)
            })
            .expect("joined");
        assert_eq!(name.as_deref(), Some("voucherify-worker"));
    }
}
