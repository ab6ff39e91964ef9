use serde::{Deserialize, Serialize};
use serialq_core::DEFAULT_QUEUE_CAPACITY;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Maximum number of unconsumed work items the queue holds; values
    /// below 1 fall back to [`DEFAULT_QUEUE_CAPACITY`]
    pub queue_capacity: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        WorkerConfig {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl WorkerConfig {
    pub fn new(queue_capacity: usize) -> Self {
        WorkerConfig { queue_capacity }
    }

    /// Capacity actually used when allocating the queue
    pub fn effective_capacity(&self) -> usize {
        if self.queue_capacity < 1 {
            DEFAULT_QUEUE_CAPACITY
        } else {
            self.queue_capacity
        }
    }
}
