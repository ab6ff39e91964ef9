pub mod config;
pub mod executor;
pub mod lifecycle;
pub mod worker;

pub use config::WorkerConfig;
pub use executor::{Executor, TokioExecutor};
pub use lifecycle::LifeCycle;
pub use worker::Worker;
