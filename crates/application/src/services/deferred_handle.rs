use ferrous_mirror_domain::{DomainError, MirrorResponse, RequestId};
use std::pin::pin;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, OnceLock};
use tokio::sync::Notify;
use tokio::time::Instant;
use tracing::warn;

/// Lifecycle of a deferred mirror request.
///
/// `Pending → Running → {Completed, Failed}`; `Expired` can be reached from
/// either non-terminal state once the deadline passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DeferredState {
    Pending = 0,
    Running = 1,
    Completed = 2,
    Failed = 3,
    Expired = 4,
}

impl DeferredState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Pending,
            1 => Self::Running,
            2 => Self::Completed,
            3 => Self::Failed,
            _ => Self::Expired,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Expired)
    }
}

/// Terminal value of a deferred handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredOutcome {
    Completed(MirrorResponse),
    Failed(DomainError),
    Expired,
}

impl DeferredOutcome {
    pub fn state(&self) -> DeferredState {
        match self {
            Self::Completed(_) => DeferredState::Completed,
            Self::Failed(_) => DeferredState::Failed,
            Self::Expired => DeferredState::Expired,
        }
    }
}

struct Shared {
    request_id: RequestId,
    deadline: Instant,
    state: AtomicU8,
    outcome: OnceLock<DeferredOutcome>,
    published: Notify,
}

/// Write-once result cell shared between a worker and the request waiting
/// on it.
///
/// Exactly one terminal write succeeds: the writer that wins the
/// compare-and-set on `state` is the only one allowed to publish into
/// `outcome`. Every later write gets `Err` with the state that won.
#[derive(Clone)]
pub struct DeferredHandle {
    shared: Arc<Shared>,
}

impl DeferredHandle {
    pub fn new(request_id: RequestId, deadline: Instant) -> Self {
        Self {
            shared: Arc::new(Shared {
                request_id,
                deadline,
                state: AtomicU8::new(DeferredState::Pending as u8),
                outcome: OnceLock::new(),
                published: Notify::new(),
            }),
        }
    }

    pub fn request_id(&self) -> RequestId {
        self.shared.request_id
    }

    pub fn state(&self) -> DeferredState {
        DeferredState::from_u8(self.shared.state.load(Ordering::Acquire))
    }

    pub fn is_resolved(&self) -> bool {
        self.state().is_terminal()
    }

    /// Terminal value, if one has been published.
    pub fn outcome(&self) -> Option<DeferredOutcome> {
        self.shared.outcome.get().cloned()
    }

    /// Moves `Pending` to `Running`. Returns `false` when the handle is
    /// already terminal and the work should not start.
    pub fn mark_running(&self) -> bool {
        match self.shared.state.compare_exchange(
            DeferredState::Pending as u8,
            DeferredState::Running as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => true,
            Err(current) => !DeferredState::from_u8(current).is_terminal(),
        }
    }

    pub fn complete(&self, response: MirrorResponse) -> Result<(), DeferredState> {
        self.resolve(DeferredOutcome::Completed(response))
    }

    pub fn fail(&self, error: DomainError) -> Result<(), DeferredState> {
        self.resolve(DeferredOutcome::Failed(error))
    }

    pub fn expire(&self) -> Result<(), DeferredState> {
        self.resolve(DeferredOutcome::Expired)
    }

    fn resolve(&self, outcome: DeferredOutcome) -> Result<(), DeferredState> {
        let target = outcome.state() as u8;
        let mut current = self.shared.state.load(Ordering::Acquire);
        loop {
            let state = DeferredState::from_u8(current);
            if state.is_terminal() {
                return Err(state);
            }
            match self.shared.state.compare_exchange_weak(
                current,
                target,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => break,
                Err(actual) => current = actual,
            }
        }

        // Only the CAS winner reaches this point, so the slot is always empty.
        let _ = self.shared.outcome.set(outcome);
        self.shared.published.notify_waiters();
        Ok(())
    }

    /// Resolves once any terminal value has been published.
    pub async fn resolved(&self) {
        let mut notified = pin!(self.shared.published.notified());
        notified.as_mut().enable();
        if self.shared.outcome.get().is_some() {
            return;
        }
        notified.await;
    }

    /// Waits for the terminal value, expiring the handle when the deadline
    /// passes first.
    pub async fn wait(&self) -> DeferredOutcome {
        let mut notified = pin!(self.shared.published.notified());
        notified.as_mut().enable();

        if let Some(outcome) = self.shared.outcome.get() {
            return outcome.clone();
        }

        let timed_out = tokio::time::timeout_at(self.shared.deadline, notified.as_mut())
            .await
            .is_err();

        if timed_out {
            match self.expire() {
                Ok(()) => warn!(
                    request_id = %self.shared.request_id,
                    "Deferred request expired before completion"
                ),
                Err(_) if self.shared.outcome.get().is_none() => {
                    // Lost the race to a writer that has not published yet.
                    notified.await;
                }
                Err(_) => {}
            }
        }

        self.shared
            .outcome
            .get()
            .cloned()
            .unwrap_or(DeferredOutcome::Expired)
    }
}

impl std::fmt::Debug for DeferredHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredHandle")
            .field("request_id", &self.shared.request_id)
            .field("state", &self.state())
            .finish()
    }
}
