//! Single element stream

use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::stream::FusedStream;
use futures::{FutureExt, Stream};
use tokio::task::JoinHandle;

use super::{Executor, Invocation};
use crate::error::CallResult;
use crate::operation::Operation;

enum State<T> {
    /// Not polled yet
    Pending {
        executor: Executor,
        invoke: Invocation<T>,
    },
    /// Operation spawned on the executor
    Running(JoinHandle<CallResult<T>>),
    Done,
}

/// Stream yielding the outcome of one operation, then ending
///
/// The operation is spawned on the worker executor at the first poll. Dropping
/// the stream afterwards does not abort it.
pub struct Single<T> {
    operation: Operation,
    state: State<T>,
}

impl<T> fmt::Debug for Single<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            State::Pending { .. } => "pending",
            State::Running(_) => "running",
            State::Done => "done",
        };
        f.debug_struct("Single")
            .field("operation", &self.operation)
            .field("state", &state)
            .finish()
    }
}

impl<T> Single<T> {
    pub(crate) fn new(operation: Operation, executor: Executor, invoke: Invocation<T>) -> Self {
        Self {
            operation,
            state: State::Pending { executor, invoke },
        }
    }
}

impl<T> Stream for Single<T>
where
    T: Send + 'static,
{
    type Item = CallResult<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        loop {
            match std::mem::replace(&mut this.state, State::Done) {
                State::Pending { executor, invoke } => {
                    tracing::debug!("Subscribing to {}", this.operation);
                    this.state = State::Running(executor.spawn(invoke()));
                }
                State::Running(mut task) => {
                    return match task.poll_unpin(cx) {
                        Poll::Pending => {
                            this.state = State::Running(task);
                            Poll::Pending
                        }
                        Poll::Ready(Ok(result)) => Poll::Ready(Some(result)),
                        Poll::Ready(Err(err)) => {
                            tracing::error!(
                                "Operation {} did not complete: {}",
                                this.operation,
                                err
                            );
                            Poll::Ready(Some(Err(err.into())))
                        }
                    };
                }
                State::Done => return Poll::Ready(None),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            State::Done => (0, Some(0)),
            _ => (1, Some(1)),
        }
    }
}

impl<T> FusedStream for Single<T>
where
    T: Send + 'static,
{
    fn is_terminated(&self) -> bool {
        matches!(self.state, State::Done)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use futures::StreamExt;

    use super::*;
    use crate::dispatch::Call;
    use crate::error::Error;
    use crate::operation::Resource;
    use crate::transport::Method;

    const OPERATION: Operation = Operation::new(Resource::Vouchers, "get", Method::Get);

    fn counting_call(counter: Arc<AtomicUsize>) -> Call<usize> {
        let executor = Executor::shared().expect("runtime");
        Call::new(OPERATION, executor, move || {
            let counter = Arc::clone(&counter);
            async move { Ok(counter.fetch_add(1, Ordering::SeqCst) + 1) }
        })
    }

    #[test]
    fn test_stream_is_cold() {
        let counter = Arc::new(AtomicUsize::new(0));
        let call = counting_call(Arc::clone(&counter));

        let stream = call.stream();
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert_eq!(stream.size_hint(), (1, Some(1)));

        let items: Vec<_> = futures::executor::block_on(stream.collect());
        assert_eq!(items.len(), 1);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_every_stream_is_a_new_invocation() {
        let counter = Arc::new(AtomicUsize::new(0));
        let call = counting_call(Arc::clone(&counter));

        let first = futures::executor::block_on(call.stream().next());
        let second = futures::executor::block_on(call.stream().next());

        assert_eq!(first.map(|r| r.expect("value")), Some(1));
        assert_eq!(second.map(|r| r.expect("value")), Some(2));
    }

    #[test]
    fn test_stream_ends_after_one_item() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut stream = counting_call(counter).stream();

        futures::executor::block_on(async {
            assert!(stream.next().await.is_some());
            assert!(stream.is_terminated());
            assert!(stream.next().await.is_none());
        });
    }

    #[test]
    fn test_panic_is_reported_as_worker_error() {
        let executor = Executor::shared().expect("runtime");
        let explode = true;
        let call: Call<()> = Call::new(OPERATION, executor, move || async move {
            if explode {
                panic!("operation blew up");
            }
            Ok(())
        });

        let item = futures::executor::block_on(call.stream().next());
        assert!(matches!(item, Some(Err(Error::Worker(_)))));
    }
}
