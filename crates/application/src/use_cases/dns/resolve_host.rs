use crate::ports::HostResolver;
use ferrous_mirror_domain::{DnsRecordSet, DomainError};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

pub struct ResolveHostUseCase {
    resolver: Arc<dyn HostResolver>,
    timeout: Duration,
}

impl ResolveHostUseCase {
    pub fn new(resolver: Arc<dyn HostResolver>, timeout: Duration) -> Self {
        Self { resolver, timeout }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, hostname: &str) -> Result<DnsRecordSet, DomainError> {
        let records = tokio::time::timeout(self.timeout, self.resolver.resolve_all(hostname))
            .await
            .map_err(|_| {
                warn!(hostname, timeout_ms = self.timeout.as_millis() as u64, "Resolution timed out");
                DomainError::ResolutionError(format!("resolution of '{hostname}' timed out"))
            })??;

        debug!(hostname, count = records.len(), "Hostname resolved");
        Ok(records)
    }
}
