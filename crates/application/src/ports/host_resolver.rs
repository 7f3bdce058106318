use async_trait::async_trait;
use ferrous_mirror_domain::{DnsRecordSet, DomainError};
use std::net::IpAddr;

/// Name resolution as provided by the platform.
///
/// Failures follow one taxonomy:
/// - [`DomainError::UnknownHost`] when the name does not resolve
/// - [`DomainError::ResolutionDenied`] when resolution is refused by policy
/// - [`DomainError::ResolutionError`] for everything else
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn resolve_all(&self, hostname: &str) -> Result<DnsRecordSet, DomainError>;

    /// Single address of the name, IPv4 first when the name has one. A lookup
    /// that succeeds with no addresses counts as an unknown host here since
    /// there is nothing to probe.
    async fn resolve_one(&self, hostname: &str) -> Result<IpAddr, DomainError> {
        self.resolve_all(hostname)
            .await?
            .preferred()
            .ok_or_else(|| DomainError::UnknownHost(hostname.to_string()))
    }
}
