use std::fmt;

/// Opaque unit of deferred execution submitted by a producer
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Element type of the worker queue
///
/// The shutdown signal is an explicit variant rather than a distinguished
/// job value, so the consumption loop dispatches on a tag instead of
/// comparing identities.
pub enum QueueEntry {
    /// A producer-submitted work item
    Work(Job),
    /// Control entry that terminates the consumption loop; inserted only
    /// by the shutdown path, never by producers
    Shutdown,
}

impl QueueEntry {
    /// Wrap a closure as a work entry
    pub fn work<F>(job: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        QueueEntry::Work(Box::new(job))
    }

    /// Check whether this entry is the shutdown signal
    pub fn is_shutdown(&self) -> bool {
        matches!(self, QueueEntry::Shutdown)
    }
}

impl fmt::Debug for QueueEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueEntry::Work(_) => f.write_str("Work(..)"),
            QueueEntry::Shutdown => f.write_str("Shutdown"),
        }
    }
}
