use super::{DeferredHandle, DeferredTask};
use ferrous_mirror_domain::config::MirrorConfig;
use ferrous_mirror_domain::{DomainError, MirrorInstruction, RequestId};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, info};

#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    pub pool_size: usize,
    pub expiry_slack: Duration,
    pub correlation_header: Arc<str>,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self::from(&MirrorConfig::default())
    }
}

impl From<&MirrorConfig> for DispatcherConfig {
    fn from(config: &MirrorConfig) -> Self {
        Self {
            pool_size: config.worker_pool_size.max(1),
            expiry_slack: Duration::from_millis(config.expiry_slack_ms),
            correlation_header: Arc::from(config.correlation_header.as_str()),
        }
    }
}

/// Bounded pool running [`DeferredTask`]s off the request path.
///
/// At most `pool_size` tasks execute at once. Further submissions wait for a
/// free slot instead of being refused, and a submission that expires while
/// waiting is dropped from the queue without running.
pub struct WorkerDispatcher {
    config: DispatcherConfig,
    permits: Arc<Semaphore>,
    tracker: TaskTracker,
    shutdown: CancellationToken,
}

impl WorkerDispatcher {
    pub fn new(config: DispatcherConfig) -> Self {
        let permits = Arc::new(Semaphore::new(config.pool_size));
        Self {
            config,
            permits,
            tracker: TaskTracker::new(),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Schedules the instruction and returns its handle without waiting.
    ///
    /// The handle expires at `now + wait + expiry_slack`.
    pub fn submit(&self, instruction: MirrorInstruction, request_id: RequestId) -> DeferredHandle {
        let deadline = Instant::now() + instruction.wait() + self.config.expiry_slack;
        let handle = DeferredHandle::new(request_id, deadline);

        if self.shutdown.is_cancelled() {
            let _ = handle.fail(DomainError::TaskFailed("dispatcher is shut down".to_string()));
            return handle;
        }

        let task = DeferredTask::new(
            instruction,
            handle.clone(),
            Arc::clone(&self.config.correlation_header),
        );
        let watch = handle.clone();
        let permits = Arc::clone(&self.permits);
        let shutdown = self.shutdown.clone();

        self.tracker.spawn(async move {
            let _permit = tokio::select! {
                permit = permits.acquire_owned() => match permit {
                    Ok(permit) => permit,
                    Err(_) => {
                        let _ = watch.fail(DomainError::TaskFailed("worker pool closed".to_string()));
                        return;
                    }
                },
                _ = watch.resolved() => {
                    debug!(%request_id, "Deferred request resolved while queued");
                    return;
                }
                _ = shutdown.cancelled() => {
                    let _ = watch.fail(DomainError::TaskFailed("dispatcher shutting down".to_string()));
                    return;
                }
            };

            if AssertUnwindSafe(task.run(shutdown)).catch_unwind().await.is_err() {
                error!(%request_id, "Deferred task panicked");
                let _ = watch.fail(DomainError::TaskFailed("worker panicked".to_string()));
            }
        });

        debug!(%request_id, in_flight = self.tracker.len(), "Deferred request submitted");
        handle
    }

    /// Free worker slots right now.
    pub fn available_workers(&self) -> usize {
        self.permits.available_permits()
    }

    /// Submitted tasks that have not finished, queued ones included.
    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }

    /// Interrupts sleeping workers and waits for every task to wind down.
    pub async fn shutdown(&self) {
        info!(in_flight = self.tracker.len(), "Shutting down worker dispatcher");
        self.shutdown.cancel();
        self.tracker.close();
        self.tracker.wait().await;
        info!("Worker dispatcher stopped");
    }
}
