use async_trait::async_trait;
use ferrous_mirror_application::ports::HostResolver;
use ferrous_mirror_domain::{DnsRecordSet, DomainError};
use std::io;
use tracing::debug;

/// Resolves names through the operating system resolver (`getaddrinfo`),
/// the same path every other process on the host uses.
#[derive(Debug, Default, Clone)]
pub struct SystemHostResolver;

impl SystemHostResolver {
    pub fn new() -> Self {
        Self
    }

    /// Maps a lookup failure onto the resolution taxonomy.
    ///
    /// The platform reports "name not known" through an uncategorized error
    /// kind, so anything not recognised as a policy refusal or a transient
    /// failure counts as an unknown host.
    pub fn classify_error(hostname: &str, error: &io::Error) -> DomainError {
        match error.kind() {
            io::ErrorKind::PermissionDenied => DomainError::ResolutionDenied(hostname.to_string()),
            io::ErrorKind::TimedOut
            | io::ErrorKind::Interrupted
            | io::ErrorKind::WouldBlock
            | io::ErrorKind::OutOfMemory
            | io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::BrokenPipe
            | io::ErrorKind::Unsupported => DomainError::ResolutionError(error.to_string()),
            _ => DomainError::UnknownHost(hostname.to_string()),
        }
    }
}

#[async_trait]
impl HostResolver for SystemHostResolver {
    async fn resolve_all(&self, hostname: &str) -> Result<DnsRecordSet, DomainError> {
        if hostname.is_empty() {
            return Err(DomainError::UnknownHost(hostname.to_string()));
        }

        match tokio::net::lookup_host((hostname, 0)).await {
            Ok(addrs) => {
                let records: DnsRecordSet = addrs.map(|addr| addr.ip()).collect();
                debug!(hostname, count = records.len(), "System lookup succeeded");
                Ok(records)
            }
            Err(e) => {
                debug!(hostname, error = %e, kind = ?e.kind(), "System lookup failed");
                Err(Self::classify_error(hostname, &e))
            }
        }
    }
}
