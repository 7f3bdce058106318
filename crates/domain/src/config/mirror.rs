use serde::{Deserialize, Serialize};

/// Hard ceiling for `max_wait_ms`; no configuration may delay a response longer.
pub const WAIT_CEILING_MS: u64 = 60_000;

/// What to do with a `waitMs` above `max_wait_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Silently lower the delay to the maximum
    #[default]
    Clamp,
    /// Answer the request with 400 Bad Request
    Reject,
}

/// Mirror endpoint configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MirrorConfig {
    /// Maximum number of mirror tasks executing at once (default: 256).
    /// Submissions beyond this wait for a free slot.
    #[serde(default = "default_worker_pool_size")]
    pub worker_pool_size: usize,

    /// Upper bound for a requested delay in milliseconds (default and
    /// maximum: 60000)
    #[serde(default = "default_max_wait_ms")]
    pub max_wait_ms: u64,

    /// Extra time on top of the requested delay before a pending request
    /// expires, in milliseconds (default: 5000)
    #[serde(default = "default_expiry_slack_ms")]
    pub expiry_slack_ms: u64,

    /// Handling of delays above `max_wait_ms` (default: clamp)
    #[serde(default)]
    pub out_of_range: RangePolicy,

    /// Response header carrying the request id (default: "REQ_COUNTER")
    #[serde(default = "default_correlation_header")]
    pub correlation_header: String,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            worker_pool_size: default_worker_pool_size(),
            max_wait_ms: default_max_wait_ms(),
            expiry_slack_ms: default_expiry_slack_ms(),
            out_of_range: RangePolicy::default(),
            correlation_header: default_correlation_header(),
        }
    }
}

fn default_worker_pool_size() -> usize {
    256
}

fn default_max_wait_ms() -> u64 {
    WAIT_CEILING_MS
}

fn default_expiry_slack_ms() -> u64 {
    5_000
}

fn default_correlation_header() -> String {
    "REQ_COUNTER".to_string()
}
