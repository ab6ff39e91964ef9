use futures::future::BoxFuture;
use tokio::runtime::Handle;

/// Execution resource that runs a unit of work on an independent task
///
/// The worker schedules its consumption loop through this trait and never
/// owns the underlying pool or runtime. Implementations may queue
/// internally but must not drop an accepted task.
pub trait Executor: Send + Sync {
    /// Schedule `task` to run to completion
    fn execute(&self, task: BoxFuture<'static, ()>);
}

/// Executor backed by a tokio runtime handle
#[derive(Clone)]
pub struct TokioExecutor {
    handle: Handle,
}

impl TokioExecutor {
    pub fn new(handle: Handle) -> Self {
        TokioExecutor { handle }
    }

    /// Executor for the runtime the caller is currently on
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime context.
    pub fn current() -> Self {
        TokioExecutor {
            handle: Handle::current(),
        }
    }
}

impl Executor for TokioExecutor {
    fn execute(&self, task: BoxFuture<'static, ()>) {
        self.handle.spawn(task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_tokio_executor_runs_task() {
        let executor = TokioExecutor::current();
        let (tx, rx) = tokio::sync::oneshot::channel();

        executor.execute(Box::pin(async move {
            let _ = tx.send(42);
        }));

        assert_eq!(rx.await.unwrap(), 42);
    }
}
