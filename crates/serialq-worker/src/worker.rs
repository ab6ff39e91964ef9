use std::panic::{catch_unwind, AssertUnwindSafe};

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, error, warn};

use serialq_core::{bounded, BoundedReceiver, BoundedSender, QueueEntry};

use crate::config::WorkerConfig;
use crate::executor::Executor;
use crate::lifecycle::LifeCycle;

/// Serial task executor fronted by a bounded FIFO queue
///
/// Producers hand zero-argument jobs to [`submit`](Worker::submit); a
/// single consumption loop, scheduled onto the supplied [`Executor`] by
/// [`start`](Worker::start), removes them in submission order and runs
/// each to completion before taking the next. [`close`](Worker::close)
/// enqueues a shutdown entry behind all previously accepted work and the
/// loop exits when it reaches it. A stopped worker cannot be restarted;
/// construct a fresh instance instead.
pub struct Worker {
    entries: BoundedSender<QueueEntry>,
    /// Parked until `start` moves it into the consumption loop
    receiver: Mutex<Option<BoundedReceiver<QueueEntry>>>,
    executor: Box<dyn Executor>,
}

impl Worker {
    /// Create a worker with the default queue capacity
    pub fn new<E>(executor: E) -> Self
    where
        E: Executor + 'static,
    {
        Self::with_config(executor, WorkerConfig::default())
    }

    /// Create a worker with the given configuration
    ///
    /// A `queue_capacity` below 1 falls back to
    /// [`DEFAULT_QUEUE_CAPACITY`](serialq_core::DEFAULT_QUEUE_CAPACITY).
    /// The queue is allocated here; consumption does not begin until
    /// [`start`](Worker::start).
    pub fn with_config<E>(executor: E, config: WorkerConfig) -> Self
    where
        E: Executor + 'static,
    {
        let (entries, receiver) = bounded(config.effective_capacity());

        Worker {
            entries,
            receiver: Mutex::new(Some(receiver)),
            executor: Box::new(executor),
        }
    }

    /// Schedule the consumption loop onto the executor
    ///
    /// Returns immediately. Starting twice is a caller error; the second
    /// call logs a warning and does nothing.
    pub fn start(&self) {
        let receiver = self.receiver.lock().take();

        match receiver {
            Some(receiver) => self.executor.execute(Box::pin(run_loop(receiver))),
            None => warn!("worker already started"),
        }
    }

    /// Attempt to enqueue `job` without blocking
    ///
    /// Returns `true` if the queue had capacity. `false` is backpressure,
    /// not an error: the queue is full, or the consumption loop has
    /// already terminated, and the caller decides whether to drop, retry,
    /// or wait.
    ///
    /// A submission racing with [`close`](Worker::close) may still be
    /// accepted; an item that lands behind the shutdown entry is never
    /// executed.
    pub fn submit<F>(&self, job: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        self.entries.try_push(QueueEntry::work(job))
    }

    /// Request orderly shutdown
    ///
    /// Enqueues the shutdown entry, waiting for a slot if the queue is
    /// momentarily full, and returns once the entry is accepted — not
    /// once the loop has drained the items ahead of it. If the loop is
    /// already gone the failure is swallowed: shutdown is best-effort.
    pub async fn close(&self) {
        if self.entries.push(QueueEntry::Shutdown).await.is_err() {
            debug!("consumption loop already terminated");
        }
    }
}

#[async_trait]
impl LifeCycle for Worker {
    fn start(&self) {
        Worker::start(self);
    }

    async fn close(&self) {
        Worker::close(self).await;
    }
}

/// Drain the queue until the shutdown entry is reached
///
/// Jobs run one at a time, in queue order. A panicking job is caught and
/// logged so it cannot abort consumption of the items behind it. The
/// queue closing under the loop (worker dropped while running) is logged
/// and treated as quiet termination.
async fn run_loop(mut entries: BoundedReceiver<QueueEntry>) {
    debug!("consumption loop started");

    loop {
        match entries.pop().await {
            Some(QueueEntry::Work(job)) => {
                if catch_unwind(AssertUnwindSafe(job)).is_err() {
                    error!("work item panicked, continuing with next item");
                }
            }
            Some(QueueEntry::Shutdown) => {
                debug!("shutdown entry reached, consumption loop exiting");
                break;
            }
            None => {
                error!("queue closed while waiting for work");
                break;
            }
        }
    }
}
