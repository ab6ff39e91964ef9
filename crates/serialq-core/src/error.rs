use thiserror::Error;

/// Returned when inserting into a queue whose consumer has gone away
#[derive(Error, Debug, PartialEq, Eq)]
#[error("queue is closed")]
pub struct QueueClosed;
