use serde::{Deserialize, Serialize};

/// Resolve and ping endpoint configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Upper bound for a single name lookup in milliseconds (default: 5000)
    #[serde(default = "default_resolve_timeout_ms")]
    pub resolve_timeout_ms: u64,

    /// Probe timeout used when a ping request names none (default: 1000)
    #[serde(default = "default_ping_timeout_ms")]
    pub default_ping_timeout_ms: u64,

    /// Largest probe timeout a caller may request (default: 30000)
    #[serde(default = "default_max_ping_timeout_ms")]
    pub max_ping_timeout_ms: u64,

    /// TCP port the reachability probe connects to (default: 7, echo)
    #[serde(default = "default_probe_port")]
    pub probe_port: u16,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            resolve_timeout_ms: default_resolve_timeout_ms(),
            default_ping_timeout_ms: default_ping_timeout_ms(),
            max_ping_timeout_ms: default_max_ping_timeout_ms(),
            probe_port: default_probe_port(),
        }
    }
}

fn default_resolve_timeout_ms() -> u64 {
    5_000
}

fn default_ping_timeout_ms() -> u64 {
    1_000
}

fn default_max_ping_timeout_ms() -> u64 {
    30_000
}

fn default_probe_port() -> u16 {
    7
}
