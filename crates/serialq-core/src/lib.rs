mod entry;
mod error;
mod queue;

pub use entry::{Job, QueueEntry};
pub use error::QueueClosed;
pub use queue::{bounded, BoundedReceiver, BoundedSender};

/// Queue capacity used when a caller asks for a capacity below 1
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;
