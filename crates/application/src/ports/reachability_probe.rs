use async_trait::async_trait;
use ferrous_mirror_domain::DomainError;
use std::net::IpAddr;
use std::time::Duration;

/// Bounded-time reachability check against one address.
///
/// Implementations must return within `timeout` plus a small overhead. A host
/// that is down and a host that did not answer in time both yield
/// `Ok(false)`; `Err` is reserved for failures of the probe itself.
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    async fn is_reachable(&self, address: IpAddr, timeout: Duration) -> Result<bool, DomainError>;
}
