use super::DeferredHandle;
use ferrous_mirror_domain::{DomainError, MirrorInstruction, MirrorResponse, RequestId};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Produces the mirrored response for one instruction and writes it into
/// its [`DeferredHandle`].
pub struct DeferredTask {
    instruction: MirrorInstruction,
    handle: DeferredHandle,
    correlation_header: Arc<str>,
}

impl DeferredTask {
    pub fn new(
        instruction: MirrorInstruction,
        handle: DeferredHandle,
        correlation_header: Arc<str>,
    ) -> Self {
        Self {
            instruction,
            handle,
            correlation_header,
        }
    }

    pub fn request_id(&self) -> RequestId {
        self.handle.request_id()
    }

    /// Runs the task. A cancelled `shutdown` token interrupts the delay and
    /// fails the handle; the task never retries.
    pub async fn run(self, shutdown: CancellationToken) {
        let request_id = self.request_id();

        if !self.handle.mark_running() {
            warn!(%request_id, "Processing of deferred request skipped, already expired");
            return;
        }

        let wait = self.instruction.wait();
        if !wait.is_zero() {
            tokio::select! {
                _ = tokio::time::sleep(wait) => {}
                _ = shutdown.cancelled() => {
                    warn!(%request_id, wait_ms = self.instruction.wait_ms(), "Deferred request interrupted during delay");
                    let _ = self.handle.fail(DomainError::TaskFailed(
                        "interrupted during delay".to_string(),
                    ));
                    return;
                }
                _ = self.handle.resolved() => {
                    info!(%request_id, state = ?self.handle.state(), "Deferred request resolved during delay, abandoning");
                    return;
                }
            }
        }

        let response = self.build_response();
        let status = response.status_code;
        match self.handle.complete(response) {
            Ok(()) => debug!(%request_id, status, "Processing of deferred request done"),
            Err(state) => info!(%request_id, ?state, "Late arrival: deferred request already resolved"),
        }
    }

    fn build_response(&self) -> MirrorResponse {
        let request_id = self.request_id();
        let mut headers: Vec<(String, String)> = self
            .instruction
            .response_headers()
            .iter()
            .filter(|(name, _)| !name.eq_ignore_ascii_case(&self.correlation_header))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        headers.push((self.correlation_header.to_string(), request_id.to_string()));

        MirrorResponse {
            request_id,
            status_code: self.instruction.status_code(),
            headers,
            body: self.instruction.response_body().to_string(),
        }
    }
}
