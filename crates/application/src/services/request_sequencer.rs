use ferrous_mirror_domain::RequestId;
use std::sync::atomic::{AtomicU64, Ordering};

/// Issues strictly increasing request ids.
///
/// Owned by whoever submits mirror requests and shared by reference; there is
/// no process-global instance.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    counter: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> RequestId {
        RequestId::new(self.counter.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}
