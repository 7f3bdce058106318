use crate::services::{DeferredHandle, DeferredOutcome, RequestSequencer, WorkerDispatcher};
use ferrous_mirror_domain::MirrorInstruction;
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct MirrorRequestUseCase {
    sequencer: Arc<RequestSequencer>,
    dispatcher: Arc<WorkerDispatcher>,
}

impl MirrorRequestUseCase {
    pub fn new(sequencer: Arc<RequestSequencer>, dispatcher: Arc<WorkerDispatcher>) -> Self {
        Self {
            sequencer,
            dispatcher,
        }
    }

    /// Stamps a request id and hands the instruction to the dispatcher.
    pub fn submit(&self, instruction: MirrorInstruction) -> DeferredHandle {
        let request_id = self.sequencer.next();
        debug!(
            %request_id,
            status = instruction.status_code(),
            wait_ms = instruction.wait_ms(),
            "Submitting mirror request"
        );
        self.dispatcher.submit(instruction, request_id)
    }

    #[instrument(skip_all, fields(status = instruction.status_code(), wait_ms = instruction.wait_ms()))]
    pub async fn execute(&self, instruction: MirrorInstruction) -> DeferredOutcome {
        self.submit(instruction).wait().await
    }
}
