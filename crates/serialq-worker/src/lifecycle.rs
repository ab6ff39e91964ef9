use async_trait::async_trait;

/// Lifecycle surface shared by long-lived components
#[async_trait]
pub trait LifeCycle {
    /// Begin operation; returns immediately
    fn start(&self);

    /// Request orderly shutdown; resolves once the request is accepted,
    /// not once in-flight work has drained
    async fn close(&self);
}
