use tokio::sync::mpsc;

use crate::error::QueueClosed;

/// Create a bounded multi-producer, single-consumer FIFO queue
///
/// Insertion order is the total order in which items are later removed.
/// The queue closes once the receiver is dropped; it never reopens.
///
/// # Panics
///
/// Panics if `capacity` is 0. Callers normalize the capacity first (see
/// [`DEFAULT_QUEUE_CAPACITY`](crate::DEFAULT_QUEUE_CAPACITY)).
pub fn bounded<T>(capacity: usize) -> (BoundedSender<T>, BoundedReceiver<T>) {
    let (tx, rx) = mpsc::channel(capacity);
    (BoundedSender { tx }, BoundedReceiver { rx })
}

/// Producer half of the bounded queue
pub struct BoundedSender<T> {
    tx: mpsc::Sender<T>,
}

impl<T> Clone for BoundedSender<T> {
    fn clone(&self) -> Self {
        BoundedSender {
            tx: self.tx.clone(),
        }
    }
}

impl<T> BoundedSender<T> {
    /// Insert `item` if the queue has spare capacity
    ///
    /// Never blocks. Returns `false` when the queue is full or closed;
    /// the item is dropped in that case.
    pub fn try_push(&self, item: T) -> bool {
        self.tx.try_send(item).is_ok()
    }

    /// Insert `item`, waiting for a slot if the queue is full
    pub async fn push(&self, item: T) -> Result<(), QueueClosed> {
        self.tx.send(item).await.map_err(|_| QueueClosed)
    }

    /// Number of additional items the queue can accept right now
    pub fn remaining_capacity(&self) -> usize {
        self.tx.capacity()
    }

    /// Capacity the queue was created with
    pub fn max_capacity(&self) -> usize {
        self.tx.max_capacity()
    }
}

/// Consumer half of the bounded queue
pub struct BoundedReceiver<T> {
    rx: mpsc::Receiver<T>,
}

impl<T> BoundedReceiver<T> {
    /// Remove the next item, waiting while the queue is empty
    ///
    /// Returns `None` once every sender has been dropped and the queue is
    /// drained.
    pub async fn pop(&mut self) -> Option<T> {
        self.rx.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_fifo_order() {
        let (tx, mut rx) = bounded(10);

        for i in 0..5 {
            assert!(tx.try_push(i));
        }

        for i in 0..5 {
            assert_eq!(rx.pop().await, Some(i));
        }
    }

    #[tokio::test]
    async fn test_try_push_rejects_when_full() {
        let (tx, mut rx) = bounded(2);

        assert!(tx.try_push(1));
        assert!(tx.try_push(2));
        assert!(!tx.try_push(3));

        // Capacity recovers as items are removed
        assert_eq!(rx.pop().await, Some(1));
        assert!(tx.try_push(4));
    }

    #[tokio::test]
    async fn test_push_waits_for_space() {
        let (tx, mut rx) = bounded(1);
        assert!(tx.try_push(1));

        let blocked = {
            let tx = tx.clone();
            tokio::spawn(async move { tx.push(2).await })
        };

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!blocked.is_finished());

        assert_eq!(rx.pop().await, Some(1));
        blocked.await.unwrap().unwrap();
        assert_eq!(rx.pop().await, Some(2));
    }

    #[tokio::test]
    async fn test_closed_queue_rejects_inserts() {
        let (tx, rx) = bounded::<u32>(2);
        drop(rx);

        assert!(!tx.try_push(1));
        assert_eq!(tx.push(2).await, Err(QueueClosed));
    }

    #[tokio::test]
    async fn test_pop_returns_none_after_senders_drop() {
        let (tx, mut rx) = bounded(2);
        assert!(tx.try_push(7));
        drop(tx);

        assert_eq!(rx.pop().await, Some(7));
        assert_eq!(rx.pop().await, None);
    }

    #[tokio::test]
    async fn test_capacity_accounting() {
        let (tx, _rx) = bounded::<u32>(3);
        assert_eq!(tx.max_capacity(), 3);
        assert_eq!(tx.remaining_capacity(), 3);

        assert!(tx.try_push(1));
        assert_eq!(tx.remaining_capacity(), 2);
        assert_eq!(tx.max_capacity(), 3);
    }
}
