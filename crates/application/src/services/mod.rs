pub mod deferred_handle;
pub mod deferred_task;
pub mod instruction_normalizer;
pub mod request_sequencer;
pub mod worker_dispatcher;

pub use deferred_handle::{DeferredHandle, DeferredOutcome, DeferredState};
pub use deferred_task::DeferredTask;
pub use instruction_normalizer::{InstructionNormalizer, InstructionSource};
pub use request_sequencer::RequestSequencer;
pub use worker_dispatcher::{DispatcherConfig, WorkerDispatcher};
