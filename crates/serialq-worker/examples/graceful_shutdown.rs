use std::sync::Arc;
use std::time::Duration;

use serialq_worker::{TokioExecutor, Worker, WorkerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let worker = Arc::new(Worker::with_config(
        TokioExecutor::current(),
        WorkerConfig::new(8),
    ));
    worker.start();

    for i in 0..5 {
        let accepted = worker.submit(move || {
            tracing::info!("processing job {}", i);
        });

        if !accepted {
            tracing::warn!("job {} rejected, queue full", i);
        }
    }

    worker.close().await;
    tracing::info!("shutdown requested, waiting for drain");

    // The worker does not expose drain completion; give the loop a moment
    tokio::time::sleep(Duration::from_millis(100)).await;

    Ok(())
}
